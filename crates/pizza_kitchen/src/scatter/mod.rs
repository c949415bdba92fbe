//! Scatter strategies that turn chosen ingredients into placed instances.
//!
//! A reduction hands each category group to one [`ScatterKind`] as a list of
//! [`Emission`]s (one per requested instance, with scale and rotation already
//! resolved). The strategy assigns canvas positions, applies containment
//! correction and returns one [`Placement`] per instance it managed to place.
//! [`ScatterKind::Grid`] and [`ScatterKind::FiveSpot`] may return fewer
//! placements than emissions.
use std::f64::consts::TAU;
use std::fmt;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::MadeIngredientPrep;
use crate::random::Derivation;

pub mod five_spot;
pub mod geometry;
pub mod grid;
pub mod random_scatter;
pub mod spoke_cluster;
pub mod tree_ring;

pub use five_spot::FiveSpotScatter;
pub use geometry::CanvasConfig;
pub use grid::GridScatter;
pub use random_scatter::RandomScatter;
pub use spoke_cluster::SpokeClusterScatter;
pub use tree_ring::TreeRingScatter;

/// Closed set of placement strategies an ingredient scope may permit.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScatterKind {
    Random,
    Grid,
    TreeRing,
    FiveSpot,
    SpokeCluster,
}

impl ScatterKind {
    pub const ALL: [ScatterKind; 5] = [
        ScatterKind::Random,
        ScatterKind::Grid,
        ScatterKind::TreeRing,
        ScatterKind::FiveSpot,
        ScatterKind::SpokeCluster,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScatterKind::Random => "random",
            ScatterKind::Grid => "grid",
            ScatterKind::TreeRing => "tree-ring",
            ScatterKind::FiveSpot => "five-spot",
            ScatterKind::SpokeCluster => "spoke-cluster",
        }
    }

    /// Runs the strategy configured for this kind in `config`.
    pub fn evaluate(
        self,
        config: &ScatterConfig,
        canvas: &CanvasConfig,
        emissions: &[Emission],
        derivation: &mut Derivation,
    ) -> Vec<Placement> {
        match self {
            ScatterKind::Random => config.random.evaluate(canvas, emissions, derivation),
            ScatterKind::Grid => config.grid.evaluate(canvas, emissions, derivation),
            ScatterKind::TreeRing => config.tree_ring.evaluate(canvas, emissions, derivation),
            ScatterKind::FiveSpot => config.five_spot.evaluate(canvas, emissions, derivation),
            ScatterKind::SpokeCluster => {
                config.spoke_cluster.evaluate(canvas, emissions, derivation)
            }
        }
    }
}

impl fmt::Display for ScatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One instance waiting for a position.
#[derive(Clone, Debug, PartialEq)]
pub struct Emission {
    /// Index of the selected ingredient this instance belongs to.
    pub owner: usize,
    pub image_uri: String,
    pub scale: f64,
    pub rotation: f64,
}

impl Emission {
    pub(crate) fn place(&self, translation: DVec2) -> Placement {
        Placement {
            owner: self.owner,
            prep: MadeIngredientPrep {
                translation,
                rotation: self.rotation,
                scale: self.scale,
                image_uri: self.image_uri.clone(),
            },
        }
    }
}

/// A placed instance together with the emission owner it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub owner: usize,
    pub prep: MadeIngredientPrep,
}

/// A placement algorithm.
pub trait Scatter {
    /// Places `emissions` on `canvas`. Output positions are containment
    /// corrected; output order follows emission order.
    fn evaluate(
        &self,
        canvas: &CanvasConfig,
        emissions: &[Emission],
        derivation: &mut Derivation,
    ) -> Vec<Placement>;
}

/// Parameters of every strategy.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScatterConfig {
    pub random: RandomScatter,
    pub grid: GridScatter,
    pub tree_ring: TreeRingScatter,
    pub five_spot: FiveSpotScatter,
    pub spoke_cluster: SpokeClusterScatter,
}

impl ScatterConfig {
    pub fn validate(&self) -> Result<()> {
        self.random.validate()?;
        self.grid.validate()?;
        self.tree_ring.validate()?;
        self.five_spot.validate()?;
        self.spoke_cluster.validate()?;
        Ok(())
    }
}

/// Start angle and spacing for `count` evenly spaced instances.
pub(crate) fn even_angles(derivation: &mut Derivation, tag: &str, count: usize) -> (f64, f64) {
    let start = derivation.next_float(tag) * TAU;
    (start, TAU / count as f64)
}

pub(crate) fn ensure_positive(value: f64, name: &str) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(crate::error::Error::InvalidConfig(format!(
            "{name} must be > 0"
        )))
    }
}

pub(crate) fn ensure_non_negative(value: f64, name: &str) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(crate::error::Error::InvalidConfig(format!(
            "{name} must be >= 0"
        )))
    }
}
