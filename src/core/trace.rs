//! Step-by-step simulation traces.
//!
//! A trace is the ordered record of active-state sets produced as a
//! cursor consumes input, one entry per consumed symbol plus the start
//! entry. Traces are immutable values - `record` returns a new trace -
//! and exist to drive stepwise visualization in whatever front end
//! consumes the engine.

use super::automaton::{StateId, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What drove a trace entry: the start of the run, or a consumed symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input<A> {
    /// The entry recorded by `reset`, before any symbol is consumed.
    Start,
    /// The entry recorded by a successful step on this symbol.
    Symbol(A),
}

/// A single entry in a trace: an input and the active set it produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TraceEntry<Q: StateId, A: Symbol> {
    /// The start marker or the symbol that was consumed.
    pub input: Input<A>,
    /// The active-state set after consuming the input.
    pub active: BTreeSet<Q>,
}

/// Ordered, append-only history of a simulation run.
///
/// The first entry is always the `Start` marker paired with the initial
/// set; every later entry records one consumed symbol and the active set
/// it produced. Recording is pure - the existing trace is untouched and
/// a new one is returned.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeSet;
/// use nfasim::core::{Input, Trace, TraceEntry};
///
/// let trace: Trace<u32, char> = Trace::start(BTreeSet::from([0]));
///
/// let trace = trace.record(TraceEntry {
///     input: Input::Symbol('a'),
///     active: BTreeSet::from([0, 1]),
/// });
///
/// assert_eq!(trace.len(), 2);
/// assert_eq!(trace.active_sets().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Trace<Q: StateId, A: Symbol> {
    entries: Vec<TraceEntry<Q, A>>,
}

impl<Q: StateId, A: Symbol> Trace<Q, A> {
    /// Create a trace positioned at the start of a run.
    ///
    /// The trace holds a single entry: the `Start` marker paired with
    /// the given initial active set.
    pub fn start(initial: BTreeSet<Q>) -> Self {
        Self {
            entries: vec![TraceEntry {
                input: Input::Start,
                active: initial,
            }],
        }
    }

    /// Record an entry, returning a new trace.
    ///
    /// This is a pure function - it does not mutate the existing trace
    /// but returns a new one with the entry appended.
    pub fn record(&self, entry: TraceEntry<Q, A>) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// All entries, in the order they were recorded.
    pub fn entries(&self) -> &[TraceEntry<Q, A>] {
        &self.entries
    }

    /// The most recently recorded entry.
    pub fn last(&self) -> Option<&TraceEntry<Q, A>> {
        self.entries.last()
    }

    /// The ordered sequence of active sets, one per entry.
    ///
    /// This is the shape a visual stepper consumes: the set of states to
    /// highlight after each consumed symbol, starting with the initial
    /// set.
    pub fn active_sets(&self) -> Vec<&BTreeSet<Q>> {
        self.entries.iter().map(|entry| &entry.active).collect()
    }

    /// Number of entries, including the start entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the trace holds no entries.
    ///
    /// A trace produced by a cursor always starts with the `Start`
    /// entry; an empty trace can only be observed through deserialized
    /// data that has not yet been validated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
