//! Inclusive numeric ranges used by recipes and ingredient scopes.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Inclusive `[min, max]` range of real values.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Create a range, rejecting inverted or non-finite bounds.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let range = Self { min, max };
        range.validate("range")?;
        Ok(range)
    }

    /// A degenerate range that always resolves to `value`.
    pub const fn fixed(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Checks the bounds, naming `field` in the error.
    pub fn validate(&self, field: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(Error::invalid_range(field, self.min, self.max));
        }
        Ok(())
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Inclusive `[min, max]` range of instance counts.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        let range = Self { min, max };
        range.validate("range")?;
        Ok(range)
    }

    pub const fn fixed(value: u32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn validate(&self, field: &str) -> Result<()> {
        if self.min > self.max {
            return Err(Error::invalid_range(
                field,
                f64::from(self.min),
                f64::from(self.max),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    /// The same bounds as a [`ValueRange`], used for drawing.
    #[inline]
    pub fn as_value_range(&self) -> ValueRange {
        ValueRange {
            min: f64::from(self.min),
            max: f64::from(self.max),
        }
    }
}
