//! Evenly spaced placement on a single ring.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::random::Derivation;
use crate::scatter::{
    ensure_non_negative, ensure_positive, even_angles, CanvasConfig, Emission, Placement, Scatter,
};

/// All instances on one ring, evenly spaced by angle from a seeded start.
///
/// The ring radius is `radius` plus half the footprint of the largest
/// instance, so bigger instances sit farther out. When that leaves room before
/// the containment boundary, the ring is pushed out by a seeded amount of at
/// most `jitter`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct TreeRingScatter {
    pub radius: f64,
    pub jitter: f64,
}

impl Default for TreeRingScatter {
    fn default() -> Self {
        Self {
            radius: 300.0,
            jitter: 120.0,
        }
    }
}

impl TreeRingScatter {
    pub fn new(radius: f64, jitter: f64) -> Self {
        Self { radius, jitter }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive(self.radius, "tree_ring.radius")?;
        ensure_non_negative(self.jitter, "tree_ring.jitter")
    }

    /// Ring radius for instances whose largest scale is `max_scale`.
    pub fn ring_radius(
        &self,
        canvas: &CanvasConfig,
        max_scale: f64,
        derivation: &mut Derivation,
    ) -> f64 {
        let half = canvas.half_footprint(max_scale);
        let base = self.radius + half;
        let margin = canvas.containment_radius - (base + half);
        if margin > 0.0 && self.jitter > 0.0 {
            base + derivation.next_float("tree-ring-radius") * margin.min(self.jitter)
        } else {
            base
        }
    }
}

impl Scatter for TreeRingScatter {
    fn evaluate(
        &self,
        canvas: &CanvasConfig,
        emissions: &[Emission],
        derivation: &mut Derivation,
    ) -> Vec<Placement> {
        if emissions.is_empty() {
            return Vec::new();
        }

        let max_scale = emissions.iter().map(|e| e.scale).fold(0.0, f64::max);
        let ring = self.ring_radius(canvas, max_scale, derivation);
        let (start, step) = even_angles(derivation, "tree-ring-angle", emissions.len());

        let mut out: Vec<Placement> = emissions
            .iter()
            .enumerate()
            .map(|(i, emission)| {
                let local = DVec2::from_angle(start + step * i as f64) * ring;
                emission.place(canvas.to_canvas(local))
            })
            .collect();
        canvas.contain_all(&mut out);
        out
    }
}
