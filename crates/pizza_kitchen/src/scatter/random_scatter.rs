//! Independent random placement inside a circle.
use std::f64::consts::TAU;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::random::Derivation;
use crate::scatter::{ensure_positive, CanvasConfig, Emission, Placement, Scatter};

/// Each instance gets an independent angle and radius.
///
/// The radius is `inner_radius * f^radius_exponent` for a uniform `f`. An
/// exponent of `0.5` spreads instances uniformly over the disk area; the
/// default of `0.75` eases them toward the center so the rim stays sparse.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct RandomScatter {
    pub inner_radius: f64,
    pub radius_exponent: f64,
}

impl Default for RandomScatter {
    fn default() -> Self {
        Self {
            inner_radius: 720.0,
            radius_exponent: 0.75,
        }
    }
}

impl RandomScatter {
    pub fn new(inner_radius: f64) -> Self {
        Self {
            inner_radius,
            ..Default::default()
        }
    }

    pub fn with_radius_exponent(mut self, exponent: f64) -> Self {
        self.radius_exponent = exponent;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive(self.inner_radius, "random.inner_radius")?;
        ensure_positive(self.radius_exponent, "random.radius_exponent")
    }
}

impl Scatter for RandomScatter {
    fn evaluate(
        &self,
        canvas: &CanvasConfig,
        emissions: &[Emission],
        derivation: &mut Derivation,
    ) -> Vec<Placement> {
        let mut out = Vec::with_capacity(emissions.len());
        for emission in emissions {
            let angle = derivation.next_float("random-angle") * TAU;
            let f = derivation.next_float("random-radius");
            let radius = self.inner_radius * f.powf(self.radius_exponent);
            let local = DVec2::from_angle(angle) * radius;
            out.push(emission.place(canvas.to_canvas(local)));
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
    fn places_every_instance_within_inner_radius() {
        let strategy = RandomScatter::new(300.0);
        let c = canvas();
        let out = strategy.evaluate(
            &c,
            &emissions(200, 0.5),
            &mut Derivation::new(Seed::from_u64(3)),
        );
        assert_eq!(out.len(), 200);
        for p in out {
            assert!((p.prep.translation - c.center()).length() <= 300.0 + 1e-9);
        }
    }

    #[test]
    fn draws_two_values_per_instance() {
        let mut d = Derivation::new(Seed::from_u64(4));
        RandomScatter::default().evaluate(&canvas(), &emissions(7, 1.0), &mut d);
        assert_eq!(d.nonce().value(), 14);
    }

    #[test]
    fn exponent_pulls_instances_toward_center() {
        let c = canvas();
        let items = emissions(500, 0.1);
        let mean_distance = |exponent: f64| {
            let out = RandomScatter::new(600.0)
                .with_radius_exponent(exponent)
                .evaluate(&c, &items, &mut Derivation::new(Seed::from_u64(6)));
            out.iter()
                .map(|p| (p.prep.translation - c.center()).length())
                .sum::<f64>()
                / out.len() as f64
        };
        assert!(mean_distance(0.75) < mean_distance(0.5));
    }

    #[test]
    fn oversized_instances_are_pulled_inside() {
        let c = canvas();
        let out = RandomScatter::new(880.0).evaluate(
            &c,
            &emissions(100, 2.0),
            &mut Derivation::new(Seed::from_u64(8)),
        );
        assert!(out.iter().all(|p| c.is_contained(p.prep.translation, p.prep.scale)));
    }
}
