//! Placement on five fixed anchors.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::random::{shuffle, Derivation};
use crate::scatter::{ensure_non_negative, CanvasConfig, Emission, Placement, Scatter};

pub const FIVE_SPOT_ANCHORS: usize = 5;

/// One instance per anchor, anchors taken in shuffled order.
///
/// Anchors are center-origin offsets. Each placed instance is moved by up to
/// `jitter` per axis. At most five instances are placed; the rest of the
/// emissions are dropped.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct FiveSpotScatter {
    pub anchors: [DVec2; FIVE_SPOT_ANCHORS],
    pub jitter: f64,
}

impl Default for FiveSpotScatter {
    fn default() -> Self {
        Self {
            anchors: [
                DVec2::ZERO,
                DVec2::new(-420.0, -420.0),
                DVec2::new(420.0, -420.0),
                DVec2::new(-420.0, 420.0),
                DVec2::new(420.0, 420.0),
            ],
            jitter: 40.0,
        }
    }
}

impl FiveSpotScatter {
    pub fn new(anchors: [DVec2; FIVE_SPOT_ANCHORS], jitter: f64) -> Self {
        Self { anchors, jitter }
    }

    pub fn validate(&self) -> Result<()> {
        if self.anchors.iter().any(|a| !a.is_finite()) {
            return Err(Error::InvalidConfig(
                "five_spot.anchors must be finite".into(),
            ));
        }
        ensure_non_negative(self.jitter, "five_spot.jitter")
    }
}

impl Scatter for FiveSpotScatter {
    fn evaluate(
        &self,
        canvas: &CanvasConfig,
        emissions: &[Emission],
        derivation: &mut Derivation,
    ) -> Vec<Placement> {
        if emissions.is_empty() {
            return Vec::new();
        }
        if emissions.len() > FIVE_SPOT_ANCHORS {
            debug!(
                "Five-spot places {} instances; dropping {}.",
                FIVE_SPOT_ANCHORS,
                emissions.len() - FIVE_SPOT_ANCHORS
            );
        }

        let order = shuffle(derivation, (0..FIVE_SPOT_ANCHORS).collect::<Vec<_>>());
        let mut out = Vec::with_capacity(emissions.len().min(FIVE_SPOT_ANCHORS));
        for (emission, anchor) in emissions.iter().zip(order) {
            let jitter = DVec2::new(
                derivation.next_signed("five-spot-jitter"),
                derivation.next_signed("five-spot-jitter"),
            ) * self.jitter;
            out.push(emission.place(canvas.to_canvas(self.anchors[anchor] + jitter)));
        }
        canvas.contain_all(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Seed;
    use crate::scatter::test_support::{canvas, emissions};

    #[test]
    fn extra_instances_are_dropped() {
        let out = FiveSpotScatter::default().evaluate(
            &canvas(),
            &emissions(9, 0.5),
            &mut Derivation::new(Seed::from_u64(1)),
        );
        assert_eq!(out.len(), 5);
        assert_eq!(out.last().unwrap().prep.image_uri, "img-4");
    }

    #[test]
    fn each_anchor_used_once() {
        let c = canvas();
        let strategy = FiveSpotScatter::new(
            [
                DVec2::new(0.0, 0.0),
                DVec2::new(100.0, 0.0),
                DVec2::new(200.0, 0.0),
                DVec2::new(300.0, 0.0),
                DVec2::new(400.0, 0.0),
            ],
            0.0,
        );
        let out = strategy.evaluate(
            &c,
            &emissions(5, 0.5),
            &mut Derivation::new(Seed::from_u64(2)),
        );
        let mut xs: Vec<i64> = out
            .iter()
            .map(|p| (p.prep.translation.x - c.center().x).round() as i64)
            .collect();
        xs.sort_unstable();
        assert_eq!(xs, vec![0, 100, 200, 300, 400]);
    }

    #[test]
    fn jitter_is_bounded() {
        let c = canvas();
        let strategy = FiveSpotScatter::default();
        let out = strategy.evaluate(
            &c,
            &emissions(5, 0.1),
            &mut Derivation::new(Seed::from_u64(3)),
        );
        for p in out {
            let local = p.prep.translation - c.center();
            let nearest = strategy
                .anchors
                .iter()
                .map(|a| (local - *a).abs().max_element())
                .fold(f64::INFINITY, f64::min);
            assert!(nearest <= strategy.jitter);
        }
    }

    #[test]
    fn assignment_order_depends_on_seed() {
        let c = canvas();
        let strategy = FiveSpotScatter::default();
        let items = emissions(5, 0.1);
        let layouts: std::collections::HashSet<Vec<(i64, i64)>> = (0..20u64)
            .map(|s| {
                strategy
                    .evaluate(&c, &items, &mut Derivation::new(Seed::from_u64(s)))
                    .iter()
                    .map(|p| {
                        (
                            (p.prep.translation.x / 100.0).round() as i64,
                            (p.prep.translation.y / 100.0).round() as i64,
                        )
                    })
                    .collect()
            })
            .collect();
        assert!(layouts.len() > 1);
    }
}
