//! Catalog ingredients and the ranges that scope them inside a recipe.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{CountRange, ValueRange};
use crate::rarity::Rarity;
use crate::scatter::ScatterKind;

/// Which part of the pizza an ingredient belongs to.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    Box,
    Paper,
    Crust,
    Sauce,
    Cheese,
    Topping,
    Extras,
    LastChance,
}

impl Classification {
    pub const ALL: [Classification; 8] = [
        Classification::Box,
        Classification::Paper,
        Classification::Crust,
        Classification::Sauce,
        Classification::Cheese,
        Classification::Topping,
        Classification::Extras,
        Classification::LastChance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Classification::Box => "box",
            Classification::Paper => "paper",
            Classification::Crust => "crust",
            Classification::Sauce => "sauce",
            Classification::Cheese => "cheese",
            Classification::Topping => "topping",
            Classification::Extras => "extras",
            Classification::LastChance => "last-chance",
        }
    }

    /// Base layers cover the whole pizza and are placed at the canvas center
    /// instead of being scattered.
    pub fn is_base(&self) -> bool {
        matches!(
            self,
            Classification::Box
                | Classification::Paper
                | Classification::Crust
                | Classification::Sauce
                | Classification::Cheese
        )
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The part of a category string before the first `-`.
///
/// Catalog categories encode a sub-type after a hyphen (`"meat-pepperoni"`);
/// ingredients are grouped by the head (`"meat"`). Categories without a hyphen
/// are their own group.
pub fn category_group(category: &str) -> &str {
    category.split_once('-').map_or(category, |(head, _)| head)
}

/// Immutable catalog entry.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ingredient_rarity: Rarity,
    /// Weight used when choosing between the options of one classification.
    #[cfg_attr(feature = "serde", serde(default))]
    pub variant_rarity: Rarity,
    pub classification: Classification,
    /// Free-form category; see [`category_group`].
    pub category: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_uri: String,
}

impl Ingredient {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        classification: Classification,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ingredient_rarity: Rarity::Common,
            variant_rarity: Rarity::Common,
            classification,
            category: category.into(),
            image_uri: String::new(),
        }
    }

    pub fn with_rarity(mut self, ingredient: Rarity, variant: Rarity) -> Self {
        self.ingredient_rarity = ingredient;
        self.variant_rarity = variant;
        self
    }

    pub fn with_image(mut self, image_uri: impl Into<String>) -> Self {
        self.image_uri = image_uri.into();
        self
    }

    pub fn category_group(&self) -> &str {
        category_group(&self.category)
    }
}

/// Ranges bounding how a selected ingredient is emitted and placed.
///
/// Fields missing from serialized input take their [`Default`] values.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct IngredientScope {
    /// Strategies this ingredient may be scattered with.
    pub scatter_types: Vec<ScatterKind>,
    /// Number of visual instances per selection.
    pub emission_count: CountRange,
    pub emission_density: ValueRange,
    /// Per-instance scale as a fraction of the base ingredient size.
    pub scale: ValueRange,
    /// Per-instance rotation in degrees.
    pub rotation: ValueRange,
}

impl Default for IngredientScope {
    fn default() -> Self {
        Self {
            scatter_types: vec![ScatterKind::Random],
            emission_count: CountRange::fixed(1),
            emission_density: ValueRange::fixed(1.0),
            scale: ValueRange::fixed(1.0),
            rotation: ValueRange {
                min: 0.0,
                max: 360.0,
            },
        }
    }
}

impl IngredientScope {
    pub fn with_scatter_types(mut self, kinds: impl Into<Vec<ScatterKind>>) -> Self {
        self.scatter_types = kinds.into();
        self
    }

    pub fn with_emission_count(mut self, range: CountRange) -> Self {
        self.emission_count = range;
        self
    }

    pub fn with_emission_density(mut self, range: ValueRange) -> Self {
        self.emission_density = range;
        self
    }

    pub fn with_scale(mut self, range: ValueRange) -> Self {
        self.scale = range;
        self
    }

    pub fn with_rotation(mut self, range: ValueRange) -> Self {
        self.rotation = range;
        self
    }

    /// Validates every range; `context` prefixes the field names in errors.
    pub fn validate(&self, context: &str) -> Result<()> {
        self.emission_count
            .validate(&format!("{context}.emission_count"))?;
        self.emission_density
            .validate(&format!("{context}.emission_density"))?;
        self.scale.validate(&format!("{context}.scale"))?;
        self.rotation.validate(&format!("{context}.rotation"))?;
        if self.emission_count.min == 0 {
            return Err(Error::invalid_range(
                format!("{context}.emission_count (must emit at least once)"),
                0.0,
                f64::from(self.emission_count.max),
            ));
        }
        if self.scale.min < 0.0 {
            return Err(Error::invalid_range(
                format!("{context}.scale (negative)"),
                self.scale.min,
                self.scale.max,
            ));
        }
        Ok(())
    }
}

/// An ingredient paired with its scope.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ScopedIngredient {
    pub ingredient: Ingredient,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scope: IngredientScope,
}

impl ScopedIngredient {
    pub fn new(ingredient: Ingredient, scope: IngredientScope) -> Self {
        Self { ingredient, scope }
    }
}
