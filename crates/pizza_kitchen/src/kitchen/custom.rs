//! Hand-built orders that skip the recipe catalog.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::{Classification, Recipe, RecipeInstructions, ScopedIngredient};

/// Options supplied for one category of a custom order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CustomCategory {
    /// Prefix of the recipe keys generated for the options.
    pub key: String,
    pub options: Vec<ScopedIngredient>,
}

impl CustomCategory {
    pub fn new(key: impl Into<String>, options: impl Into<Vec<ScopedIngredient>>) -> Self {
        Self {
            key: key.into(),
            options: options.into(),
        }
    }
}

/// A pizza-type-specific category list assembled by hand.
///
/// [`CustomOrder::to_recipe`] sorts every option into the recipe section its
/// classification belongs to, so a custom order reduces exactly like a
/// catalog recipe.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CustomOrder {
    pub pizza_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub instructions: RecipeInstructions,
    pub categories: Vec<CustomCategory>,
}

impl CustomOrder {
    pub fn new(pizza_type: impl Into<String>) -> Self {
        Self {
            pizza_type: pizza_type.into(),
            instructions: RecipeInstructions::default(),
            categories: Vec::new(),
        }
    }

    pub fn with_instructions(mut self, instructions: RecipeInstructions) -> Self {
        self.instructions = instructions;
        self
    }

    pub fn with_category(
        mut self,
        key: impl Into<String>,
        options: impl Into<Vec<ScopedIngredient>>,
    ) -> Self {
        self.categories.push(CustomCategory::new(key, options));
        self
    }

    /// Recipe id used for reductions of this order.
    pub fn recipe_id(&self) -> String {
        format!("custom-{}", self.pizza_type)
    }

    /// Converts the order into a recipe. Keys are `<category key>-<index>`,
    /// with the index running across all categories so repeated category keys
    /// keep every option.
    pub fn to_recipe(&self) -> Recipe {
        let mut recipe = Recipe::new(self.recipe_id(), self.pizza_type.clone())
            .with_instructions(self.instructions.clone());
        let options = self
            .categories
            .iter()
            .flat_map(|c| c.options.iter().map(move |o| (c.key.as_str(), o)));
        for (i, (category, option)) in options.enumerate() {
            let section = match option.ingredient.classification {
                c if c.is_base() => &mut recipe.base_ingredients,
                Classification::LastChance => &mut recipe.lastchances,
                _ => &mut recipe.layers,
            };
            section.insert(format!("{category}-{i}"), option.clone());
        }
        recipe
    }
}
