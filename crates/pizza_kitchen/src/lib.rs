#![forbid(unsafe_code)]
//! pizza_kitchen: deterministic reduction of pizza recipes into kitchen orders.
//!
//! A recipe describes ranges (how many toppings, which rarities, what scale);
//! a kitchen order is one concrete, reproducible pick from those ranges with
//! every ingredient instance placed on the canvas. The same recipe, token id
//! and seed always yield the same order.
//!
//! Modules:
//! - random: seed + nonce derivation (SHA-256), 256-bit seeds, seeded shuffle
//! - rarity: rarity tiers and weighted index selection
//! - scatter: canvas geometry, containment correction and the placement strategies
//! - model: recipes (input) and kitchen orders (output)
//! - kitchen: the reducer, its configuration and custom orders
//! - events: observation of reductions
pub mod error;
pub mod events;
pub mod kitchen;
pub mod model;
pub mod random;
pub mod rarity;
pub mod scatter;

/// Convenient re-exports for common types. Import with `use pizza_kitchen::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::events::{
        AsEventSink, EventSink, FilterSink, FnSink, KitchenEvent, KitchenEventKind, MultiSink,
        VecSink,
    };
    pub use crate::kitchen::{reduce, CustomCategory, CustomOrder, Kitchen, KitchenConfig};
    pub use crate::model::{
        Classification, CountRange, Ingredient, IngredientScope, KitchenOrder, MadeIngredient,
        MadeIngredientPrep, MadeInstructions, Recipe, RecipeInstructions, ScopedIngredient,
        ValueRange,
    };
    pub use crate::random::{shuffle, Derivation, Nonce, Seed, U256};
    pub use crate::rarity::{select_weighted_index, Rarity, WeightTable};
    pub use crate::scatter::{
        CanvasConfig, FiveSpotScatter, GridScatter, RandomScatter, Scatter, ScatterConfig,
        ScatterKind, SpokeClusterScatter, TreeRingScatter,
    };
}
