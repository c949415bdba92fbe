use std::collections::BTreeMap;

use pizza_kitchen::prelude::*;
use pizza_kitchen_examples::{init_tracing, sample_recipe};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let kitchen = Kitchen::try_new(KitchenConfig::default().with_last_chance_probability(0.1))?;
    let recipe = sample_recipe();
    let tokens = 2_000u64;

    let mut by_rarity: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_strategy: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut specials = 0usize;
    for token_id in 0..tokens {
        let seed = Seed::from_u64(token_id.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let order = kitchen.reduce(&recipe, token_id, Some(seed))?;
        for made in order.layers.values() {
            *by_rarity
                .entry(made.ingredient.variant_rarity.to_string())
                .or_default() += 1;
            if let Some(kind) = made.scatter {
                *by_strategy.entry(kind.label()).or_default() += 1;
            }
        }
        specials += usize::from(order.lastchances.is_some());
    }

    let picks: usize = by_rarity.values().sum();
    println!("{picks} layer picks over {tokens} tokens");
    for (rarity, count) in &by_rarity {
        println!(
            "{rarity:<10} {count:>6} {:>6.2}%",
            100.0 * *count as f64 / picks as f64
        );
    }
    for (strategy, count) in &by_strategy {
        println!("{strategy:<14} {count:>6}");
    }
    println!(
        "last chance fired for {specials} tokens ({:.1}%)",
        100.0 * specials as f64 / tokens as f64
    );
    Ok(())
}
