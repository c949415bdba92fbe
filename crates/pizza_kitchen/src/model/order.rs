//! Kitchen orders: the fully resolved output of a reduction.
use std::collections::BTreeMap;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::{Classification, Ingredient};
use crate::random::Seed;
use crate::scatter::ScatterKind;

/// One placed instance, ready for compositing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MadeIngredientPrep {
    /// Canvas position of the instance center.
    pub translation: DVec2,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Scale as a fraction of the base ingredient size.
    pub scale: f64,
    pub image_uri: String,
}

/// A selected ingredient and every instance placed for it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MadeIngredient {
    pub ingredient: Ingredient,
    /// Strategy that placed the instances; `None` for centered base layers.
    pub scatter: Option<ScatterKind>,
    /// Instances requested for this ingredient. May exceed `instances.len()`
    /// when a strategy under-fills.
    pub emission_count: u32,
    pub emission_density: f64,
    pub instances: Vec<MadeIngredientPrep>,
}

/// Scalar counts and baking values resolved from recipe instructions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MadeInstructions {
    pub box_count: u32,
    pub paper_count: u32,
    pub crust_count: u32,
    pub sauce_count: u32,
    pub cheese_count: u32,
    pub topping_count: u32,
    pub extras_count: u32,
    pub baking_temp: f64,
    pub baking_time: f64,
}

impl MadeInstructions {
    /// Number of selections to make for `classification`.
    ///
    /// Last-chance specials are not counted here; they are decided separately.
    pub fn count_for(&self, classification: Classification) -> u32 {
        match classification {
            Classification::Box => self.box_count,
            Classification::Paper => self.paper_count,
            Classification::Crust => self.crust_count,
            Classification::Sauce => self.sauce_count,
            Classification::Cheese => self.cheese_count,
            Classification::Topping => self.topping_count,
            Classification::Extras => self.extras_count,
            Classification::LastChance => 0,
        }
    }
}

/// The reproducible build plan for one token.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct KitchenOrder {
    pub token_id: u64,
    pub recipe_name: String,
    /// Seed the order was reduced from, serialized as `0x`-prefixed hex.
    pub random_seed: Seed,
    pub recipe_id: String,
    /// `false` when no seed was supplied and entropy was used instead.
    pub reproducible: bool,
    pub base_ingredients: BTreeMap<String, MadeIngredient>,
    pub layers: BTreeMap<String, MadeIngredient>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub lastchances: Option<BTreeMap<String, MadeIngredient>>,
    /// Every layer and last-chance instance in render (back to front) order.
    pub instances: Vec<MadeIngredientPrep>,
    pub instructions: MadeInstructions,
}

impl KitchenOrder {
    /// Every made ingredient with its key: base, then layers, then specials.
    pub fn made_ingredients(&self) -> impl Iterator<Item = (&String, &MadeIngredient)> {
        self.base_ingredients
            .iter()
            .chain(self.layers.iter())
            .chain(self.lastchances.iter().flatten())
    }

    /// Total number of placed instances, base layers included.
    pub fn placed_count(&self) -> usize {
        self.made_ingredients()
            .map(|(_, made)| made.instances.len())
            .sum()
    }
}
