//! Recipe reduction: from a range-valued recipe and a seed to a kitchen order.
//!
//! Every random value comes from one [`Derivation`] in a fixed order:
//!
//! 1. instruction counts and baking values,
//! 2. for each classification in [`Classification::ALL`] order, the weighted
//!    picks followed by, per category group, the emission values and the
//!    strategy draws,
//! 3. the last-chance roll and, if it fires, its pick and placement,
//! 4. the render-order shuffle.
//!
//! Changing that order changes every order produced from an existing seed.
use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::events::{EventSink, KitchenEvent, KitchenEventKind};
use crate::kitchen::KitchenConfig;
use crate::model::{
    Classification, KitchenOrder, MadeIngredient, MadeIngredientPrep, MadeInstructions, Recipe,
    RecipeInstructions, ScopedIngredient,
};
use crate::random::{shuffle, Derivation, Seed};
use crate::rarity::{missing_weights, WeightTable};
use crate::scatter::{Emission, Placement, ScatterKind};

/// Resolves counts and baking values. Draws six values.
pub fn resolve_instructions(
    instructions: &RecipeInstructions,
    derivation: &mut Derivation,
) -> MadeInstructions {
    MadeInstructions {
        box_count: 1,
        paper_count: 1,
        crust_count: 1,
        sauce_count: derivation.select_count(instructions.sauce_count, "sauce-count"),
        cheese_count: derivation.select_count(instructions.cheese_count, "cheese-count"),
        topping_count: derivation.select_count(instructions.topping_count, "topping-count"),
        extras_count: derivation.select_count(instructions.extras_count, "extras-count"),
        baking_temp: derivation.select_value(instructions.baking_temp, "baking-temp"),
        baking_time: derivation.select_value(instructions.baking_time, "baking-time"),
    }
}

/// Options of every recipe section, keyed by classification. Within a
/// classification, options keep section order then key order.
pub fn partition_options(recipe: &Recipe) -> BTreeMap<Classification, Vec<&ScopedIngredient>> {
    let mut pools: BTreeMap<Classification, Vec<&ScopedIngredient>> = BTreeMap::new();
    for option in recipe.options() {
        pools
            .entry(option.ingredient.classification)
            .or_default()
            .push(option);
    }
    pools
}

/// Groups selections by category group, in order of first appearance.
pub fn group_by_category<'a>(
    selected: &[&'a ScopedIngredient],
) -> Vec<(String, Vec<&'a ScopedIngredient>)> {
    let mut groups: Vec<(String, Vec<&'a ScopedIngredient>)> = Vec::new();
    for &option in selected {
        let name = option.ingredient.category_group();
        match groups.iter_mut().find(|(group, _)| group == name) {
            Some((_, members)) => members.push(option),
            None => groups.push((name.to_owned(), vec![option])),
        }
    }
    groups
}

/// Hands out collision-free map keys of the form `<group>-<index>`.
#[derive(Debug, Default)]
struct KeyAllocator {
    next: usize,
}

impl KeyAllocator {
    fn next(&mut self, group: &str) -> String {
        let key = format!("{group}-{}", self.next);
        self.next += 1;
        key
    }
}

struct ReduceContext<'a, 's> {
    config: &'a KitchenConfig,
    derivation: Derivation,
    sink: &'s mut dyn EventSink,
    keys: KeyAllocator,
}

impl ReduceContext<'_, '_> {
    fn emit(&mut self, kind: KitchenEventKind, event: impl FnOnce() -> KitchenEvent) {
        if self.sink.wants(kind) {
            self.sink.send(event());
        }
    }

    fn warn(&mut self, context: String, message: String) {
        warn!("{}: {}", context, message);
        self.emit(KitchenEventKind::Warning, || KitchenEvent::Warning {
            context,
            message,
        });
    }

    /// Makes `count` weighted picks from `pool`.
    fn select<'r>(
        &mut self,
        classification: Classification,
        pool: &[&'r ScopedIngredient],
        count: u32,
    ) -> Result<Vec<&'r ScopedIngredient>> {
        if pool.is_empty() {
            return Err(Error::MissingCategory {
                category: classification.label().to_owned(),
            });
        }

        let weights: Vec<u32> = pool
            .iter()
            .map(|o| o.ingredient.variant_rarity.weight())
            .collect();
        let missing = missing_weights(&weights);
        if missing > 0 {
            self.warn(
                classification.label().to_owned(),
                format!("{missing} option(s) have an unrecognised rarity and weigh as common"),
            );
        }

        let table = WeightTable::new(&weights);
        let tag = format!("select:{classification}");
        let mut picks = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let idx = table
                .draw(&mut self.derivation, &tag)
                .ok_or_else(|| Error::MissingCategory {
                    category: classification.label().to_owned(),
                })?;
            let option = pool[idx];
            self.emit(KitchenEventKind::IngredientSelected, || {
                KitchenEvent::IngredientSelected {
                    classification,
                    ingredient_id: option.ingredient.id.clone(),
                    pool_size: pool.len(),
                }
            });
            picks.push(option);
        }
        Ok(picks)
    }

    /// Resolves emissions for a group and places them, either centered or with
    /// one strategy drawn from the first member's permitted set.
    fn cook_group(
        &mut self,
        classification: Classification,
        group: &str,
        members: &[&ScopedIngredient],
    ) -> Result<Vec<MadeIngredient>> {
        let mut made = Vec::with_capacity(members.len());
        let mut emissions = Vec::new();
        for (owner, option) in members.iter().enumerate() {
            let scope = &option.scope;
            let d = &mut self.derivation;
            let emission_count = d.select_count(scope.emission_count, "emission-count");
            let emission_density = d.select_value(scope.emission_density, "emission-density");
            for _ in 0..emission_count {
                emissions.push(Emission {
                    owner,
                    image_uri: option.ingredient.image_uri.clone(),
                    scale: d.select_value(scope.scale, "scale"),
                    rotation: d.select_value(scope.rotation, "rotation"),
                });
            }
            made.push(MadeIngredient {
                ingredient: option.ingredient.clone(),
                scatter: None,
                emission_count,
                emission_density,
                instances: Vec::new(),
            });
        }

        let config = self.config;
        let canvas = &config.canvas;
        let (strategy, placements) = if classification.is_base() {
            let mut placements: Vec<Placement> = emissions
                .iter()
                .map(|e| e.place(canvas.center()))
                .collect();
            canvas.contain_all(&mut placements);
            (None, placements)
        } else {
            let kind = self.pick_strategy(members[0])?;
            let placements =
                kind.evaluate(&config.scatter, canvas, &emissions, &mut self.derivation);
            (Some(kind), placements)
        };

        debug!(
            "Placed {} of {} instances for group '{}' ({}).",
            placements.len(),
            emissions.len(),
            group,
            strategy.map_or("centered", |k| k.label())
        );
        if placements.len() < emissions.len() {
            self.warn(
                group.to_owned(),
                format!(
                    "{} placed {} of {} instances",
                    strategy.map_or("centered", |k| k.label()),
                    placements.len(),
                    emissions.len()
                ),
            );
        }
        let (requested, placed) = (emissions.len(), placements.len());
        self.emit(KitchenEventKind::GroupPlaced, || KitchenEvent::GroupPlaced {
            classification,
            group: group.to_owned(),
            strategy,
            requested,
            placed,
        });

        for placement in placements {
            made[placement.owner].instances.push(placement.prep);
        }
        for m in &mut made {
            m.scatter = strategy;
        }
        Ok(made)
    }

    fn pick_strategy(&mut self, lead: &ScopedIngredient) -> Result<ScatterKind> {
        let kinds = &lead.scope.scatter_types;
        if kinds.is_empty() {
            return Err(Error::MissingScatter {
                ingredient: lead.ingredient.id.clone(),
            });
        }
        let idx = self.derivation.next_below("scatter-kind", kinds.len() as u64) as usize;
        Ok(kinds[idx])
    }

    /// Picks, groups and places one classification. Returns the made
    /// ingredients with their keys.
    fn make_classification(
        &mut self,
        classification: Classification,
        pool: &[&ScopedIngredient],
        count: u32,
    ) -> Result<Vec<(String, MadeIngredient)>> {
        let picks = self.select(classification, pool, count)?;
        let mut out = Vec::with_capacity(picks.len());
        for (group, members) in group_by_category(&picks) {
            let name = if group.is_empty() {
                classification.label().to_owned()
            } else {
                group
            };
            for made in self.cook_group(classification, &name, &members)? {
                out.push((self.keys.next(&name), made));
            }
        }
        Ok(out)
    }
}

/// Reduces `recipe` for `token_id`, reporting progress to `sink`.
///
/// With `seed` set the output is a pure function of the arguments and
/// `config`. Without one, a seed is drawn from system entropy and the order is
/// marked non-reproducible.
pub fn reduce_with_events(
    recipe: &Recipe,
    token_id: u64,
    seed: Option<Seed>,
    config: &KitchenConfig,
    sink: &mut dyn EventSink,
) -> Result<KitchenOrder> {
    recipe.validate()?;
    recipe.check_footprints(&config.canvas)?;

    let (seed, reproducible) = match seed {
        Some(seed) => (seed, true),
        None => {
            warn!(
                "No seed supplied for token {}; the order for recipe '{}' is not reproducible.",
                token_id, recipe.id
            );
            (Seed::from_entropy(), false)
        }
    };
    info!(
        "Reducing recipe '{}' for token {} with seed {}.",
        recipe.id, token_id, seed
    );

    let mut ctx = ReduceContext {
        config,
        derivation: Derivation::new(seed),
        sink,
        keys: KeyAllocator::default(),
    };
    ctx.emit(KitchenEventKind::ReductionStarted, || {
        KitchenEvent::ReductionStarted {
            token_id,
            recipe_id: recipe.id.clone(),
            seed,
            reproducible,
        }
    });

    let instructions = resolve_instructions(&recipe.instructions, &mut ctx.derivation);
    ctx.emit(KitchenEventKind::InstructionsResolved, || {
        KitchenEvent::InstructionsResolved {
            instructions: instructions.clone(),
        }
    });

    let pools = partition_options(recipe);
    let mut base_ingredients = BTreeMap::new();
    let mut layers = BTreeMap::new();
    let mut render: Vec<MadeIngredientPrep> = Vec::new();

    for classification in Classification::ALL {
        let count = instructions.count_for(classification);
        if count == 0 {
            continue;
        }
        let pool = pools.get(&classification).map_or(&[][..], Vec::as_slice);
        for (key, made) in ctx.make_classification(classification, pool, count)? {
            if classification.is_base() {
                base_ingredients.insert(key, made);
            } else {
                render.extend(made.instances.iter().cloned());
                layers.insert(key, made);
            }
        }
    }

    let lastchances = match pools.get(&Classification::LastChance) {
        Some(pool) if !pool.is_empty() => {
            let roll = ctx.derivation.next_float("last-chance");
            let triggered = roll < config.last_chance_probability;
            ctx.emit(KitchenEventKind::LastChanceRolled, || {
                KitchenEvent::LastChanceRolled { roll, triggered }
            });
            if triggered {
                let mut specials = BTreeMap::new();
                for (key, made) in ctx.make_classification(Classification::LastChance, pool, 1)? {
                    render.extend(made.instances.iter().cloned());
                    specials.insert(key, made);
                }
                Some(specials)
            } else {
                None
            }
        }
        _ => None,
    };

    let instances = shuffle(&mut ctx.derivation, render);
    info!(
        "Reduced recipe '{}' for token {}: {} layer(s), {} placed instance(s).",
        recipe.id,
        token_id,
        layers.len(),
        instances.len()
    );
    let instance_count = instances.len();
    ctx.emit(KitchenEventKind::ReductionFinished, || {
        KitchenEvent::ReductionFinished {
            token_id,
            instance_count,
        }
    });

    Ok(KitchenOrder {
        token_id,
        recipe_name: recipe.name.clone(),
        random_seed: seed,
        recipe_id: recipe.id.clone(),
        reproducible,
        base_ingredients,
        layers,
        lastchances,
        instances,
        instructions,
    })
}
