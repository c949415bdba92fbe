#![allow(dead_code)]

use pizza_kitchen::prelude::*;
use proptest::prelude::*;

pub fn option(id: &str, classification: Classification, category: &str) -> ScopedIngredient {
    ScopedIngredient::new(
        Ingredient::new(id, id, classification, category).with_image(format!("{id}.png")),
        IngredientScope::default(),
    )
}

pub fn base_recipe(id: &str) -> Recipe {
    Recipe::new(id, id)
        .with_base("box", option("box", Classification::Box, "box"))
        .with_base("paper", option("paper", Classification::Paper, "paper"))
        .with_base("crust", option("crust", Classification::Crust, "crust-thin"))
        .with_base("sauce", option("tomato", Classification::Sauce, "sauce-tomato"))
        .with_base("cheese", option("mozz", Classification::Cheese, "cheese-mozzarella"))
}

fn topping(id: &str, category: &str, rarity: Rarity, kinds: &[ScatterKind]) -> ScopedIngredient {
    ScopedIngredient::new(
        Ingredient::new(id, id, Classification::Topping, category)
            .with_rarity(rarity.clone(), rarity)
            .with_image(format!("{id}.png")),
        IngredientScope::default().with_scatter_types(kinds.to_vec()),
    )
}

/// Topping count `(2, 10)`, one instance per topping, random placement only.
pub fn scenario_recipe() -> Recipe {
    let random = [ScatterKind::Random];
    let mut instructions = RecipeInstructions::default();
    instructions.topping_count = CountRange { min: 2, max: 10 };
    instructions.extras_count = CountRange::fixed(0);
    base_recipe("scenario")
        .with_instructions(instructions)
        .with_layer("pep", topping("pep", "meat-pepperoni", Rarity::Common, &random))
        .with_layer("ham", topping("ham", "meat-ham", Rarity::Uncommon, &random))
        .with_layer("olive", topping("olive", "veg-olive", Rarity::Rare, &random))
        .with_layer("truffle", topping("truffle", "fungi-truffle", Rarity::Grail, &random))
}

/// A recipe using every strategy, several category groups, extras and a
/// last-chance special.
pub fn full_recipe() -> Recipe {
    let all = ScatterKind::ALL;
    let mut instructions = RecipeInstructions::default();
    instructions.topping_count = CountRange { min: 3, max: 7 };
    instructions.extras_count = CountRange { min: 1, max: 2 };
    let mut basil = topping("basil", "herb-basil", Rarity::Common, &all);
    basil.scope = basil
        .scope
        .with_emission_count(CountRange { min: 2, max: 6 })
        .with_scale(ValueRange { min: 0.2, max: 0.5 });
    base_recipe("full")
        .with_instructions(instructions)
        .with_layer("pep", topping("pep", "meat-pepperoni", Rarity::Common, &all))
        .with_layer("onion", topping("onion", "veg-onion", Rarity::Uncommon, &all))
        .with_layer("basil", basil)
        .with_layer("oil", {
            let mut oil = option("oil", Classification::Extras, "drizzle-oil");
            oil.scope.scatter_types = vec![ScatterKind::SpokeCluster, ScatterKind::TreeRing];
            oil
        })
        .with_lastchance(
            "gold",
            option("gold", Classification::LastChance, "special-gold-leaf"),
        )
}

fn count_range() -> impl Strategy<Value = CountRange> {
    (0u32..6, 0u32..6).prop_map(|(a, b)| CountRange {
        min: a.min(b),
        max: a.max(b),
    })
}

fn value_range(low: f64, high: f64) -> impl Strategy<Value = ValueRange> {
    (low..high, 0.0..(high - low)).prop_map(|(min, span)| ValueRange {
        min,
        max: min + span,
    })
}

fn rarity() -> impl Strategy<Value = Rarity> {
    prop_oneof![
        Just(Rarity::Common),
        Just(Rarity::Uncommon),
        Just(Rarity::Rare),
        Just(Rarity::Grail),
        Just(Rarity::from_label("mythic")),
    ]
}

fn scope() -> impl Strategy<Value = IngredientScope> {
    (
        proptest::sample::subsequence(ScatterKind::ALL.to_vec(), 1..=ScatterKind::ALL.len()),
        (1u32..4, 0u32..4),
        value_range(0.0, 4.0),
        value_range(0.0, 2.0),
        value_range(-360.0, 360.0),
    )
        .prop_map(|(kinds, (min, extra), density, scale, rotation)| {
            IngredientScope::default()
                .with_scatter_types(kinds)
                .with_emission_count(CountRange {
                    min,
                    max: min + extra,
                })
                .with_emission_density(density)
                .with_scale(scale)
                .with_rotation(rotation)
        })
}

fn options(
    classification: Classification,
    prefix: &'static str,
    count: std::ops::Range<usize>,
) -> impl Strategy<Value = Vec<ScopedIngredient>> {
    proptest::collection::vec((rarity(), 0usize..3, scope()), count).prop_map(move |specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (rarity, group, scope))| {
                let id = format!("{prefix}{i}");
                ScopedIngredient::new(
                    Ingredient::new(&id, &id, classification, format!("g{group}-{id}"))
                        .with_rarity(Rarity::Common, rarity)
                        .with_image(format!("{id}.png")),
                    scope,
                )
            })
            .collect()
    })
}

/// Arbitrary valid recipes: every base class, one to five toppings and extras,
/// and up to two last-chance specials.
pub fn arb_recipe() -> impl Strategy<Value = Recipe> {
    (
        (count_range(), count_range(), count_range(), count_range()),
        (value_range(300.0, 600.0), value_range(5.0, 20.0)),
        options(Classification::Topping, "top", 1..6),
        options(Classification::Extras, "ext", 1..6),
        options(Classification::LastChance, "lc", 0..3),
    )
        .prop_map(
            |((sauce, cheese, toppings, extras), (temp, time), tops, exts, lcs)| {
                let mut recipe = base_recipe("arb").with_instructions(RecipeInstructions {
                    sauce_count: sauce,
                    cheese_count: cheese,
                    topping_count: toppings,
                    extras_count: extras,
                    baking_temp: temp,
                    baking_time: time,
                });
                for option in tops.into_iter().chain(exts) {
                    recipe = recipe.with_layer(option.ingredient.id.clone(), option);
                }
                for option in lcs {
                    recipe = recipe.with_lastchance(option.ingredient.id.clone(), option);
                }
                recipe
            },
        )
}

pub fn arb_seed() -> impl Strategy<Value = Seed> {
    any::<[u8; 32]>().prop_map(Seed::from_be_bytes)
}
