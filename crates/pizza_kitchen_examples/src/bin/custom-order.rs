use pizza_kitchen::prelude::*;
use pizza_kitchen_examples::{base_options, describe, init_tracing};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let hand_built = |id: &str, category: &str, kind: ScatterKind| {
        ScopedIngredient::new(
            Ingredient::new(id, id, Classification::Topping, category)
                .with_image(format!("ipfs://ingredients/{id}.png")),
            IngredientScope::default()
                .with_scatter_types(vec![kind])
                .with_emission_count(CountRange { min: 3, max: 6 })
                .with_scale(ValueRange {
                    min: 0.3,
                    max: 0.45,
                }),
        )
    };

    let mut instructions = RecipeInstructions::default();
    instructions.topping_count = CountRange { min: 2, max: 3 };
    instructions.extras_count = CountRange::fixed(0);

    let order = CustomOrder::new("white-pie")
        .with_instructions(instructions)
        .with_category("base", base_options())
        .with_category(
            "topping",
            vec![
                hand_built("ricotta", "cheese-ricotta", ScatterKind::FiveSpot),
                hand_built("garlic", "veg-garlic", ScatterKind::SpokeCluster),
                hand_built("spinach", "veg-spinach", ScatterKind::Grid),
            ],
        );

    let kitchen = Kitchen::default();
    let mut sink = FnSink::new(|event| {
        if let KitchenEvent::GroupPlaced {
            group,
            strategy,
            requested,
            placed,
            ..
        } = event
        {
            let strategy = strategy.map_or("centered", |k| k.label());
            println!("group {group:<10} {strategy:<14} {placed}/{requested}");
        }
    });
    let made = kitchen.reduce_custom_with_events(&order, 7, Some(Seed::from_u64(7)), &mut sink)?;

    for line in describe(&made) {
        println!("{line}");
    }
    Ok(())
}
