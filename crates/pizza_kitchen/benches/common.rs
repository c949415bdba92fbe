#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use pizza_kitchen::prelude::{
    Classification, CountRange, Ingredient, IngredientScope, Rarity, Recipe, RecipeInstructions,
    ScatterKind, ScopedIngredient, ValueRange,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

const TIERS: [&str; 4] = ["common", "uncommon", "rare", "grail"];
const GROUPS: [&str; 4] = ["meat", "veg", "herb", "cheese"];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

fn random_rarity(rng: &mut StdRng) -> Rarity {
    Rarity::from_label(TIERS[(rng.random::<f32>() * 4.0) as usize % 4])
}

fn base_option(id: &str, classification: Classification) -> ScopedIngredient {
    ScopedIngredient::new(
        Ingredient::new(id, id, classification, id).with_image(format!("{id}.png")),
        IngredientScope::default(),
    )
}

/// Recipe with every base class and `options` toppings and extras, each
/// emitting up to `max_emissions` instances through `kinds`.
pub fn bench_recipe(
    options: usize,
    max_emissions: u32,
    kinds: &[ScatterKind],
    seed: u64,
) -> Recipe {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut recipe = Recipe::new("bench", "Bench").with_instructions(RecipeInstructions {
        topping_count: CountRange { min: 4, max: 8 },
        extras_count: CountRange { min: 1, max: 2 },
        ..Default::default()
    });
    for (id, classification) in [
        ("box", Classification::Box),
        ("paper", Classification::Paper),
        ("crust", Classification::Crust),
        ("sauce", Classification::Sauce),
        ("cheese", Classification::Cheese),
    ] {
        recipe = recipe.with_base(id, base_option(id, classification));
    }
    for i in 0..options {
        for classification in [Classification::Topping, Classification::Extras] {
            let group = GROUPS[i % GROUPS.len()];
            let id = format!("{}-{group}-{i}", classification.label());
            let ingredient = Ingredient::new(&id, &id, classification, format!("{group}-{i}"))
                .with_rarity(random_rarity(&mut rng), random_rarity(&mut rng))
                .with_image(format!("{id}.png"));
            let scope = IngredientScope::default()
                .with_scatter_types(kinds.to_vec())
                .with_emission_count(CountRange {
                    min: 1,
                    max: max_emissions.max(1),
                })
                .with_scale(ValueRange {
                    min: 0.3,
                    max: 0.3 + rng.random::<f64>(),
                });
            recipe = recipe.with_layer(id, ScopedIngredient::new(ingredient, scope));
        }
    }
    recipe
}
