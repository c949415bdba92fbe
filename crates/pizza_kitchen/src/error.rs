//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Variants cover recipes that cannot be reduced (missing categories, missing scatter
//! strategies, inverted or oversized ranges), invalid kitchen configuration, and malformed
//! seeds.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("category '{category}' has no ingredient options to select from")]
    MissingCategory { category: String },

    #[error("ingredient '{ingredient}' permits no scatter strategy")]
    MissingScatter { ingredient: String },

    #[error("invalid range for {field}: [{min}, {max}]")]
    InvalidRange { field: String, min: f64, max: f64 },

    #[error("invalid seed: {0}")]
    InvalidSeed(String),
}

impl Error {
    pub(crate) fn invalid_range(field: impl Into<String>, min: f64, max: f64) -> Self {
        Error::InvalidRange {
            field: field.into(),
            min,
            max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_category_names_the_category() {
        let err = Error::MissingCategory {
            category: "topping".into(),
        };
        assert!(err.to_string().contains("'topping'"));
    }

    #[test]
    fn invalid_range_reports_bounds() {
        let err = Error::invalid_range("scale", 2.0, 1.0);
        assert_eq!(err.to_string(), "invalid range for scale: [2, 1]");
    }
}
