use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scatter::{CanvasConfig, ScatterConfig};

/// Configuration shared by every reduction a [`super::Kitchen`] performs.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct KitchenConfig {
    /// Canvas geometry and containment boundary.
    pub canvas: CanvasConfig,
    /// Parameters of every scatter strategy.
    pub scatter: ScatterConfig,
    /// Chance in `[0, 1]` that a recipe with last-chance options gets one.
    pub last_chance_probability: f64,
}

const PROBABILITY: RangeInclusive<f64> = 0.0..=1.0;

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            scatter: ScatterConfig::default(),
            last_chance_probability: 0.1,
        }
    }
}

impl KitchenConfig {
    /// Creates a new [`KitchenConfig`] for the given canvas.
    pub fn new(canvas: CanvasConfig) -> Self {
        Self {
            canvas,
            ..Default::default()
        }
    }

    /// Sets the strategy parameters.
    pub fn with_scatter(mut self, scatter: ScatterConfig) -> Self {
        self.scatter = scatter;
        self
    }

    /// Sets the last-chance probability.
    pub fn with_last_chance_probability(mut self, probability: f64) -> Self {
        self.last_chance_probability = probability;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.canvas.validate()?;
        self.scatter.validate()?;
        if !PROBABILITY.contains(&self.last_chance_probability) {
            return Err(Error::InvalidConfig(
                "last_chance_probability must be in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}
