//! Evenly spaced spokes with independent radii.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::random::Derivation;
use crate::scatter::{ensure_positive, even_angles, CanvasConfig, Emission, Placement, Scatter};

/// Instances evenly spaced by angle; each sits at its own random distance
/// between half its footprint and `max_radius`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct SpokeClusterScatter {
    pub max_radius: f64,
}

impl Default for SpokeClusterScatter {
    fn default() -> Self {
        Self { max_radius: 760.0 }
    }
}

impl SpokeClusterScatter {
    pub fn new(max_radius: f64) -> Self {
        Self { max_radius }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive(self.max_radius, "spoke_cluster.max_radius")
    }
}

impl Scatter for SpokeClusterScatter {
    fn evaluate(
        &self,
        canvas: &CanvasConfig,
        emissions: &[Emission],
        derivation: &mut Derivation,
    ) -> Vec<Placement> {
        if emissions.is_empty() {
            return Vec::new();
        }

        let (start, step) = even_angles(derivation, "spoke-angle", emissions.len());
        let mut out: Vec<Placement> = emissions
            .iter()
            .enumerate()
            .map(|(i, emission)| {
                let min_radius = canvas.half_footprint(emission.scale).min(self.max_radius);
                let radius = min_radius
                    + (self.max_radius - min_radius) * derivation.next_float("spoke-radius");
                let local = DVec2::from_angle(start + step * i as f64) * radius;
                emission.place(canvas.to_canvas(local))
            })
            .collect();
        canvas.contain_all(&mut out);
        out
    }
}
