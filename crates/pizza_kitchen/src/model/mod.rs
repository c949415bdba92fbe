//! Data model shared by recipes (input) and kitchen orders (output).
pub mod ingredient;
pub mod order;
pub mod range;
pub mod recipe;

pub use ingredient::{category_group, Classification, Ingredient, IngredientScope, ScopedIngredient};
pub use order::{KitchenOrder, MadeIngredient, MadeIngredientPrep, MadeInstructions};
pub use range::{CountRange, ValueRange};
pub use recipe::{Recipe, RecipeInstructions};
