//! Recipes: range-valued templates that reductions resolve into kitchen orders.
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{CountRange, ScopedIngredient, ValueRange};
use crate::rarity::Rarity;
use crate::scatter::CanvasConfig;

/// Count and baking ranges of a recipe.
///
/// Box, paper and crust are always made once and have no range.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeInstructions {
    pub sauce_count: CountRange,
    pub cheese_count: CountRange,
    pub topping_count: CountRange,
    pub extras_count: CountRange,
    /// Cosmetic metadata; does not influence placement.
    pub baking_temp: ValueRange,
    /// Cosmetic metadata; does not influence placement.
    pub baking_time: ValueRange,
}

impl Default for RecipeInstructions {
    fn default() -> Self {
        Self {
            sauce_count: CountRange::fixed(1),
            cheese_count: CountRange::fixed(1),
            topping_count: CountRange { min: 2, max: 6 },
            extras_count: CountRange { min: 0, max: 2 },
            baking_temp: ValueRange {
                min: 425.0,
                max: 550.0,
            },
            baking_time: ValueRange {
                min: 8.0,
                max: 15.0,
            },
        }
    }
}

impl RecipeInstructions {
    pub fn validate(&self) -> Result<()> {
        self.sauce_count.validate("instructions.sauce_count")?;
        self.cheese_count.validate("instructions.cheese_count")?;
        self.topping_count.validate("instructions.topping_count")?;
        self.extras_count.validate("instructions.extras_count")?;
        self.baking_temp.validate("instructions.baking_temp")?;
        self.baking_time.validate("instructions.baking_time")?;
        Ok(())
    }
}

/// A range-valued template describing the possible ingredients of a pizza.
///
/// Map keys are free-form and only used for diagnostics; options are grouped
/// by their ingredient's classification during reduction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rarity_level: Rarity,
    pub base_ingredients: BTreeMap<String, ScopedIngredient>,
    pub layers: BTreeMap<String, ScopedIngredient>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub lastchances: BTreeMap<String, ScopedIngredient>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub instructions: RecipeInstructions,
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rarity_level: Rarity::Common,
            base_ingredients: BTreeMap::new(),
            layers: BTreeMap::new(),
            lastchances: BTreeMap::new(),
            instructions: RecipeInstructions::default(),
        }
    }

    pub fn with_rarity_level(mut self, rarity: Rarity) -> Self {
        self.rarity_level = rarity;
        self
    }

    pub fn with_base(mut self, key: impl Into<String>, option: ScopedIngredient) -> Self {
        self.base_ingredients.insert(key.into(), option);
        self
    }

    pub fn with_layer(mut self, key: impl Into<String>, option: ScopedIngredient) -> Self {
        self.layers.insert(key.into(), option);
        self
    }

    pub fn with_lastchance(mut self, key: impl Into<String>, option: ScopedIngredient) -> Self {
        self.lastchances.insert(key.into(), option);
        self
    }

    pub fn with_instructions(mut self, instructions: RecipeInstructions) -> Self {
        self.instructions = instructions;
        self
    }

    /// Rejects any inverted or non-finite range before it is drawn from.
    pub fn validate(&self) -> Result<()> {
        self.instructions.validate()?;
        for (section, options) in self.sections() {
            for (key, option) in options {
                option.scope.validate(&format!("{section}.{key}"))?;
                if !option.ingredient.classification.is_base()
                    && option.scope.scatter_types.is_empty()
                {
                    return Err(Error::MissingScatter {
                        ingredient: option.ingredient.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Rejects options whose largest instance cannot fit inside the
    /// containment boundary of `canvas`.
    pub fn check_footprints(&self, canvas: &CanvasConfig) -> Result<()> {
        for (section, options) in self.sections() {
            for (key, option) in options {
                let scale = option.scope.scale;
                if !canvas.fits(scale.max) {
                    return Err(Error::invalid_range(
                        format!(
                            "{section}.{key}.scale (footprint exceeds containment radius {})",
                            canvas.containment_radius
                        ),
                        scale.min,
                        scale.max,
                    ));
                }
            }
        }
        Ok(())
    }

    fn sections(&self) -> [(&'static str, &BTreeMap<String, ScopedIngredient>); 3] {
        [
            ("base_ingredients", &self.base_ingredients),
            ("layers", &self.layers),
            ("lastchances", &self.lastchances),
        ]
    }

    /// All options across the three sections, in section then key order.
    pub fn options(&self) -> impl Iterator<Item = &ScopedIngredient> {
        self.base_ingredients
            .values()
            .chain(self.layers.values())
            .chain(self.lastchances.values())
    }
}
