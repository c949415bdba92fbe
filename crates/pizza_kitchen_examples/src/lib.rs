#![forbid(unsafe_code)]

use pizza_kitchen::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn scoped(
    id: &str,
    name: &str,
    classification: Classification,
    category: &str,
    rarity: Rarity,
    scope: IngredientScope,
) -> ScopedIngredient {
    ScopedIngredient::new(
        Ingredient::new(id, name, classification, category)
            .with_rarity(rarity.clone(), rarity)
            .with_image(format!("ipfs://ingredients/{id}.png")),
        scope,
    )
}

fn base(id: &str, name: &str, classification: Classification, category: &str) -> ScopedIngredient {
    scoped(
        id,
        name,
        classification,
        category,
        Rarity::Common,
        IngredientScope::default(),
    )
}

fn scatter(kinds: &[ScatterKind], count: (u32, u32), scale: (f64, f64)) -> IngredientScope {
    IngredientScope::default()
        .with_scatter_types(kinds.to_vec())
        .with_emission_count(CountRange {
            min: count.0,
            max: count.1,
        })
        .with_emission_density(ValueRange { min: 0.4, max: 1.0 })
        .with_scale(ValueRange {
            min: scale.0,
            max: scale.1,
        })
}

/// Base layers every demo pizza shares.
pub fn base_options() -> Vec<ScopedIngredient> {
    vec![
        base("box-kraft", "Kraft Box", Classification::Box, "box-kraft"),
        base("paper-wax", "Wax Paper", Classification::Paper, "paper-wax"),
        base("crust-thin", "Thin Crust", Classification::Crust, "crust-thin"),
        base("crust-deep", "Deep Dish", Classification::Crust, "crust-deep"),
        base("sauce-tomato", "Tomato", Classification::Sauce, "sauce-tomato"),
        base("sauce-pesto", "Pesto", Classification::Sauce, "sauce-pesto"),
        base("cheese-mozz", "Mozzarella", Classification::Cheese, "cheese-mozzarella"),
    ]
}

/// A small menu recipe with toppings in three category groups, one extra and
/// one last-chance special.
pub fn sample_recipe() -> Recipe {
    let mut recipe = Recipe::new("supreme-001", "Supreme").with_rarity_level(Rarity::Uncommon);
    for option in base_options() {
        recipe = recipe.with_base(option.ingredient.id.clone(), option);
    }
    let toppings = [
        scoped(
            "pepperoni",
            "Pepperoni",
            Classification::Topping,
            "meat-pepperoni",
            Rarity::Common,
            scatter(&[ScatterKind::Random, ScatterKind::Grid], (4, 9), (0.35, 0.5)),
        ),
        scoped(
            "sausage",
            "Sausage",
            Classification::Topping,
            "meat-sausage",
            Rarity::Uncommon,
            scatter(&[ScatterKind::SpokeCluster], (3, 6), (0.3, 0.4)),
        ),
        scoped(
            "pepper-green",
            "Green Pepper",
            Classification::Topping,
            "veg-pepper-green",
            Rarity::Common,
            scatter(&[ScatterKind::TreeRing, ScatterKind::Random], (4, 8), (0.3, 0.45)),
        ),
        scoped(
            "mushroom",
            "Mushroom",
            Classification::Topping,
            "veg-mushroom",
            Rarity::Rare,
            scatter(&[ScatterKind::FiveSpot], (3, 5), (0.4, 0.55)),
        ),
        scoped(
            "basil",
            "Basil",
            Classification::Topping,
            "herb-basil",
            Rarity::Grail,
            scatter(&ScatterKind::ALL, (2, 4), (0.25, 0.35)),
        ),
    ];
    for option in toppings {
        recipe = recipe.with_layer(option.ingredient.id.clone(), option);
    }
    recipe
        .with_layer(
            "chili-flakes",
            scoped(
                "chili-flakes",
                "Chili Flakes",
                Classification::Extras,
                "spice-chili",
                Rarity::Uncommon,
                scatter(&[ScatterKind::Random], (6, 12), (0.1, 0.15)),
            ),
        )
        .with_lastchance(
            "gold-leaf",
            scoped(
                "gold-leaf",
                "Gold Leaf",
                Classification::LastChance,
                "special-gold-leaf",
                Rarity::Grail,
                scatter(&[ScatterKind::TreeRing], (5, 5), (0.2, 0.2)),
            ),
        )
}

/// One line per made ingredient, in key order.
pub fn describe(order: &KitchenOrder) -> Vec<String> {
    order
        .made_ingredients()
        .map(|(key, made)| {
            format!(
                "{key:<16} {:<14} {:<14} {} {}/{} placed",
                made.ingredient.name,
                made.scatter.map_or("centered", |k| k.label()),
                made.ingredient.variant_rarity,
                made.instances.len(),
                made.emission_count,
            )
        })
        .collect()
}
