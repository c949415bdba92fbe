//! Rarity tiers and weighted index selection.
//!
//! [`select_weighted_index`] draws an index with probability proportional to
//! its weight: a prefix-sum array is built from the weights, a derived value is
//! reduced modulo the total, and a binary search finds the smallest index whose
//! prefix sum is at least that value.
//!
//! A weight of zero means the tier was missing or unrecognised in the catalog.
//! It is replaced by the [`Rarity::Common`] weight and logged, so a variant with
//! incomplete data stays selectable.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::random::Derivation;

pub const COMMON_WEIGHT: u32 = 550;
pub const UNCOMMON_WEIGHT: u32 = 340;
pub const RARE_WEIGHT: u32 = 100;
pub const GRAIL_WEIGHT: u32 = 10;

/// Rarity tier of an ingredient or variant.
///
/// Catalog labels that match none of the known tiers are kept verbatim in
/// [`Rarity::Unrecognized`] and weigh as common.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Grail,
    Unrecognized(String),
}

impl Rarity {
    /// Parses a catalog label, case-insensitively.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "common" => Rarity::Common,
            "uncommon" => Rarity::Uncommon,
            "rare" => Rarity::Rare,
            "grail" => Rarity::Grail,
            _ => Rarity::Unrecognized(label.to_owned()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Grail => "grail",
            Rarity::Unrecognized(label) => label,
        }
    }

    /// Selection weight of the tier; `0` for unrecognised tiers.
    pub fn weight(&self) -> u32 {
        match self {
            Rarity::Common => COMMON_WEIGHT,
            Rarity::Uncommon => UNCOMMON_WEIGHT,
            Rarity::Rare => RARE_WEIGHT,
            Rarity::Grail => GRAIL_WEIGHT,
            Rarity::Unrecognized(_) => 0,
        }
    }
}

impl From<String> for Rarity {
    fn from(value: String) -> Self {
        Rarity::from_label(&value)
    }
}

impl From<Rarity> for String {
    fn from(value: Rarity) -> Self {
        value.label().to_owned()
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Running totals of `weights`, with zero weights replaced by the common weight.
///
/// Does not log; callers report substitutions once per list.
pub fn prefix_sums(weights: &[u32]) -> Vec<u64> {
    let mut total = 0u64;
    weights
        .iter()
        .map(|&w| {
            total += u64::from(if w == 0 { COMMON_WEIGHT } else { w });
            total
        })
        .collect()
}

/// Number of weights that [`prefix_sums`] substitutes.
pub fn missing_weights(weights: &[u32]) -> usize {
    weights.iter().filter(|&&w| w == 0).count()
}

fn warn_missing(weights: &[u32]) {
    let missing = missing_weights(weights);
    if missing > 0 {
        warn!(
            "{} weight(s) missing; substituting the common weight {}.",
            missing, COMMON_WEIGHT
        );
    }
}

/// Smallest index whose prefix sum is `>= target`.
pub fn search_prefix(prefix: &[u64], target: u64) -> Option<usize> {
    let idx = prefix.partition_point(|&p| p < target);
    (idx < prefix.len()).then_some(idx)
}

/// Prefix sums of a weight list, built once and drawn from many times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightTable {
    prefix: Vec<u64>,
}

impl WeightTable {
    pub fn new(weights: &[u32]) -> Self {
        Self {
            prefix: prefix_sums(weights),
        }
    }

    pub fn from_rarities<'a, I>(rarities: I) -> Self
    where
        I: IntoIterator<Item = &'a Rarity>,
    {
        let weights: Vec<u32> = rarities.into_iter().map(Rarity::weight).collect();
        Self::new(&weights)
    }

    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.prefix.last().copied().unwrap_or(0)
    }

    /// Draws an index; advances the derivation once unless the table is empty.
    pub fn draw(&self, derivation: &mut Derivation, tag: &str) -> Option<usize> {
        if self.prefix.is_empty() {
            return None;
        }
        let target = derivation.next_below(tag, self.total());
        search_prefix(&self.prefix, target)
    }
}

/// Draws an index into `weights`. Returns `None` for an empty list.
///
/// Advances the derivation exactly once when `weights` is non-empty.
pub fn select_weighted_index(
    derivation: &mut Derivation,
    weights: &[u32],
    tag: &str,
) -> Option<usize> {
    warn_missing(weights);
    WeightTable::new(weights).draw(derivation, tag)
}

/// Weighted draw over rarity tiers.
pub fn select_by_rarity<'a, I>(derivation: &mut Derivation, rarities: I, tag: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'a Rarity>,
{
    let weights: Vec<u32> = rarities.into_iter().map(Rarity::weight).collect();
    warn_missing(&weights);
    WeightTable::new(&weights).draw(derivation, tag)
}
