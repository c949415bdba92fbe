//! The recipe reducer and its configuration.
//!
//! [`Kitchen`] holds a validated [`KitchenConfig`] and turns recipes into
//! [`KitchenOrder`]s. It keeps no state between calls, so one kitchen can be
//! shared across threads and every reduction is independent of the others.
use crate::error::Result;
use crate::events::EventSink;
use crate::model::{KitchenOrder, Recipe};
use crate::random::Seed;

pub mod config;
pub mod custom;
pub mod reducer;

pub use config::KitchenConfig;
pub use custom::{CustomCategory, CustomOrder};
pub use reducer::reduce_with_events;

#[derive(Debug, Clone, Default)]
pub struct Kitchen {
    config: KitchenConfig,
}

impl Kitchen {
    pub fn try_new(config: KitchenConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: KitchenConfig) -> Self {
        debug_assert!(
            config.canvas.containment_radius > 0.0,
            "containment_radius must be > 0"
        );
        debug_assert!(
            (0.0..=1.0).contains(&config.last_chance_probability),
            "last_chance_probability must be in [0, 1]"
        );

        Self { config }
    }

    pub fn config(&self) -> &KitchenConfig {
        &self.config
    }

    /// Reduces `recipe` into the order for `token_id`.
    ///
    /// Pass `None` as the seed only for previews: the order is then drawn from
    /// system entropy and flagged as not reproducible.
    pub fn reduce(
        &self,
        recipe: &Recipe,
        token_id: u64,
        seed: Option<Seed>,
    ) -> Result<KitchenOrder> {
        reduce_with_events(recipe, token_id, seed, &self.config, &mut ())
    }

    pub fn reduce_with_events(
        &self,
        recipe: &Recipe,
        token_id: u64,
        seed: Option<Seed>,
        sink: &mut dyn EventSink,
    ) -> Result<KitchenOrder> {
        reduce_with_events(recipe, token_id, seed, &self.config, sink)
    }

    /// Reduces a hand-built order. The output contract matches [`Self::reduce`].
    pub fn reduce_custom(
        &self,
        order: &CustomOrder,
        token_id: u64,
        seed: Option<Seed>,
    ) -> Result<KitchenOrder> {
        self.reduce(&order.to_recipe(), token_id, seed)
    }

    pub fn reduce_custom_with_events(
        &self,
        order: &CustomOrder,
        token_id: u64,
        seed: Option<Seed>,
        sink: &mut dyn EventSink,
    ) -> Result<KitchenOrder> {
        self.reduce_with_events(&order.to_recipe(), token_id, seed, sink)
    }
}

/// Reduces `recipe` with the default [`KitchenConfig`].
pub fn reduce(recipe: &Recipe, token_id: u64, seed: Option<Seed>) -> Result<KitchenOrder> {
    Kitchen::default().reduce(recipe, token_id, seed)
}
