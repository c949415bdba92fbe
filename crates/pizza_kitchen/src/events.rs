//! Event types and sinks for observing reductions.
//!
//! [`crate::kitchen::Kitchen::reduce_with_events`] reports each step of a
//! reduction as a [`KitchenEvent`]. Sinks collect, forward, or drop them.
use crate::model::{Classification, MadeInstructions};
use crate::random::Seed;
use crate::scatter::ScatterKind;

/// Describes events emitted while reducing a recipe.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum KitchenEvent {
    /// Emitted once the recipe validated and the seed is fixed.
    ReductionStarted {
        token_id: u64,
        recipe_id: String,
        seed: Seed,
        /// `false` when the seed came from system entropy.
        reproducible: bool,
    },

    /// Emitted after counts and baking values were drawn.
    InstructionsResolved { instructions: MadeInstructions },

    /// Emitted for every weighted pick from a classification pool.
    IngredientSelected {
        classification: Classification,
        ingredient_id: String,
        /// Number of options the pick was made from.
        pool_size: usize,
    },

    /// Emitted after a category group was placed.
    GroupPlaced {
        classification: Classification,
        group: String,
        /// `None` for centered base layers.
        strategy: Option<ScatterKind>,
        requested: usize,
        placed: usize,
    },

    /// Emitted when the last-chance roll was made.
    LastChanceRolled { roll: f64, triggered: bool },

    /// Non-fatal warning generated during reduction.
    Warning {
        /// Context string (e.g. group name, ingredient id).
        context: String,
        message: String,
    },

    /// Emitted when the order is assembled.
    ReductionFinished {
        token_id: u64,
        /// Length of the shuffled render list.
        instance_count: usize,
    },
}

/// Discriminant of a [`KitchenEvent`], used by [`EventSink::wants`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KitchenEventKind {
    ReductionStarted,
    InstructionsResolved,
    IngredientSelected,
    GroupPlaced,
    LastChanceRolled,
    Warning,
    ReductionFinished,
}

impl KitchenEvent {
    pub fn kind(&self) -> KitchenEventKind {
        match self {
            KitchenEvent::ReductionStarted { .. } => KitchenEventKind::ReductionStarted,
            KitchenEvent::InstructionsResolved { .. } => KitchenEventKind::InstructionsResolved,
            KitchenEvent::IngredientSelected { .. } => KitchenEventKind::IngredientSelected,
            KitchenEvent::GroupPlaced { .. } => KitchenEventKind::GroupPlaced,
            KitchenEvent::LastChanceRolled { .. } => KitchenEventKind::LastChanceRolled,
            KitchenEvent::Warning { .. } => KitchenEventKind::Warning,
            KitchenEvent::ReductionFinished { .. } => KitchenEventKind::ReductionFinished,
        }
    }
}

/// A generic event sink that accepts [`KitchenEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: KitchenEvent);

    /// Whether events of `kind` should be built at all. Emitters skip
    /// constructing events the sink does not want.
    fn wants(&self, _kind: KitchenEventKind) -> bool {
        true
    }

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = KitchenEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: KitchenEvent) {}

    #[inline]
    fn wants(&self, _kind: KitchenEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(KitchenEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(KitchenEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(KitchenEvent),
{
    #[inline]
    fn send(&mut self, event: KitchenEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<KitchenEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
        }
    }

    pub fn into_inner(self) -> Vec<KitchenEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[KitchenEvent] {
        &self.events
    }

    /// Events of one kind, in emission order.
    pub fn of_kind(&self, kind: KitchenEventKind) -> impl Iterator<Item = &KitchenEvent> {
        self.events.iter().filter(move |e| e.kind() == kind)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: KitchenEvent) {
        self.events.push(event);
    }
}

/// Sink that keeps only the listed event kinds.
pub struct FilterSink<S: EventSink> {
    inner: S,
    kinds: Vec<KitchenEventKind>,
}

impl<S: EventSink> FilterSink<S> {
    pub fn new(inner: S, kinds: impl Into<Vec<KitchenEventKind>>) -> Self {
        Self {
            inner,
            kinds: kinds.into(),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: EventSink> EventSink for FilterSink<S> {
    fn send(&mut self, event: KitchenEvent) {
        if self.wants(event.kind()) {
            self.inner.send(event);
        }
    }

    fn wants(&self, kind: KitchenEventKind) -> bool {
        self.kinds.contains(&kind) && self.inner.wants(kind)
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: KitchenEvent) {
        let kind = event.kind();
        let targets: Vec<usize> = (0..self.sinks.len())
            .filter(|&i| self.sinks[i].wants(kind))
            .collect();
        let Some((&last, rest)) = targets.split_last() else {
            return;
        };
        for &i in rest {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last].send(event);
    }

    fn wants(&self, kind: KitchenEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}

/// Minimal adapter trait for types that can expose an [`EventSink`].
pub trait AsEventSink {
    fn as_event_sink(&mut self) -> &mut dyn EventSink;
}

impl<S: EventSink> AsEventSink for S {
    fn as_event_sink(&mut self) -> &mut dyn EventSink {
        self
    }
}
