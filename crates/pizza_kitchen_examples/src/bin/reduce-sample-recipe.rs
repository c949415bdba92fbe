use pizza_kitchen::prelude::*;
use pizza_kitchen_examples::{describe, init_tracing, sample_recipe};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let kitchen = Kitchen::try_new(KitchenConfig::default())?;
    let recipe = sample_recipe();
    let seed: Seed = "0x5eed".parse()?;

    let order = kitchen.reduce(&recipe, 42, Some(seed))?;
    for line in describe(&order) {
        println!("{line}");
    }
    println!(
        "baking {:.0}°F for {:.1} min; {} instances in render order",
        order.instructions.baking_temp,
        order.instructions.baking_time,
        order.instances.len()
    );

    let replay = kitchen.reduce(&recipe, 42, Some(seed))?;
    anyhow::ensure!(
        serde_json::to_string(&replay)? == serde_json::to_string(&order)?,
        "reduction is not reproducible"
    );

    let path = "reduce-sample-recipe.json";
    std::fs::write(path, serde_json::to_string_pretty(&order)?)?;
    info!("Wrote order for token {} to {}.", order.token_id, path);
    Ok(())
}
