//! Canvas geometry shared by all scatter strategies.
//!
//! Strategies compute positions in a local frame and map them onto the canvas
//! with [`CanvasConfig::to_canvas`] (origin at the canvas center) or
//! [`CanvasConfig::from_top_left`] (origin at the top-left corner of a square
//! around the center). [`CanvasConfig::contain`] then pulls instances whose
//! footprint crosses the containment circle back inside along the same angle.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scatter::Placement;

/// Tolerance for the containment test, so corrected positions are not
/// corrected again because of rounding.
pub const CONTAINMENT_EPSILON: f64 = 1e-9;

/// Square canvas the pizza is composed on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Side length of the canvas in pixels.
    pub size: f64,
    /// Radius around the center every instance footprint must stay within.
    pub containment_radius: f64,
    /// Side length of an ingredient image at scale `1.0`.
    pub ingredient_size: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            size: 2048.0,
            containment_radius: 900.0,
            ingredient_size: 200.0,
        }
    }
}

impl CanvasConfig {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn with_containment_radius(mut self, radius: f64) -> Self {
        self.containment_radius = radius;
        self
    }

    pub fn with_ingredient_size(mut self, size: f64) -> Self {
        self.ingredient_size = size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(Error::InvalidConfig("canvas size must be > 0".into()));
        }
        if !(self.containment_radius.is_finite() && self.containment_radius > 0.0) {
            return Err(Error::InvalidConfig(
                "containment_radius must be > 0".into(),
            ));
        }
        if self.containment_radius > self.size * 0.5 {
            return Err(Error::InvalidConfig(
                "containment_radius must fit inside the canvas".into(),
            ));
        }
        if !(self.ingredient_size.is_finite() && self.ingredient_size >= 0.0) {
            return Err(Error::InvalidConfig(
                "ingredient_size must be >= 0".into(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::splat(self.size * 0.5)
    }

    /// Maps a center-origin local position onto the canvas.
    #[inline]
    pub fn to_canvas(&self, local: DVec2) -> DVec2 {
        self.center() + local
    }

    /// Maps a position local to the top-left corner of the square of
    /// half-size `half_extent` around the center onto the canvas.
    #[inline]
    pub fn from_top_left(&self, local: DVec2, half_extent: f64) -> DVec2 {
        self.center() - DVec2::splat(half_extent) + local
    }

    /// Half the visual size of an instance drawn at `scale`.
    #[inline]
    pub fn half_footprint(&self, scale: f64) -> f64 {
        self.ingredient_size * scale * 0.5
    }

    /// Corrected translation for an instance, or `None` if it already fits.
    ///
    /// The corrected position keeps the angle from the center and sits at the
    /// largest distance that keeps the footprint inside the boundary (the
    /// center itself when the footprint is larger than the boundary).
    pub fn contain(&self, translation: DVec2, scale: f64) -> Option<DVec2> {
        let center = self.center();
        let offset = translation - center;
        let distance = offset.length();
        let half = self.half_footprint(scale);
        if distance + half <= self.containment_radius + CONTAINMENT_EPSILON || distance == 0.0 {
            return None;
        }
        let allowed = (self.containment_radius - half).max(0.0);
        Some(center + offset * (allowed / distance))
    }

    /// Applies [`Self::contain`] to every placement; returns how many moved.
    pub fn contain_all(&self, placements: &mut [Placement]) -> usize {
        let mut corrected = 0;
        for placement in placements.iter_mut() {
            if let Some(t) = self.contain(placement.prep.translation, placement.prep.scale) {
                placement.prep.translation = t;
                corrected += 1;
            }
        }
        corrected
    }

    /// Whether the footprint at `translation` lies within the boundary.
    pub fn is_contained(&self, translation: DVec2, scale: f64) -> bool {
        let distance = (translation - self.center()).length();
        distance + self.half_footprint(scale) <= self.containment_radius + CONTAINMENT_EPSILON
    }

    /// Whether an instance drawn at `scale` fits inside the boundary at all.
    pub fn fits(&self, scale: f64) -> bool {
        self.half_footprint(scale) <= self.containment_radius + CONTAINMENT_EPSILON
    }
}
