//! Simulation cursors: the mutable half of the engine.

use super::automaton::{Automaton, StateId, Symbol};
use super::error::UnknownSymbolError;
use super::trace::{Input, Trace, TraceEntry};
use std::collections::BTreeSet;

/// A single simulation run over a shared, read-only automaton.
///
/// A cursor owns its active set and trace exclusively; the automaton is
/// only borrowed, so any number of cursors can run over it at once
/// without interfering. Created with [`Automaton::cursor`], reusable
/// across runs with [`Cursor::reset`].
#[derive(Clone, Debug)]
pub struct Cursor<'a, Q: StateId, A: Symbol> {
    automaton: &'a Automaton<Q, A>,
    active: BTreeSet<Q>,
    trace: Trace<Q, A>,
}

impl<'a, Q: StateId, A: Symbol> Cursor<'a, Q, A> {
    pub(crate) fn new(automaton: &'a Automaton<Q, A>) -> Self {
        let active = automaton.initial().clone();
        let trace = Trace::start(active.clone());
        Self {
            automaton,
            active,
            trace,
        }
    }

    /// Rebuild a cursor at a recorded position. The caller is
    /// responsible for having validated the position against the
    /// automaton.
    pub(crate) fn at_position(
        automaton: &'a Automaton<Q, A>,
        active: BTreeSet<Q>,
        trace: Trace<Q, A>,
    ) -> Self {
        Self {
            automaton,
            active,
            trace,
        }
    }

    /// The automaton this cursor runs over.
    pub fn automaton(&self) -> &'a Automaton<Q, A> {
        self.automaton
    }

    /// The current active-state set (pure).
    pub fn active(&self) -> &BTreeSet<Q> {
        &self.active
    }

    /// The trace recorded so far (pure).
    pub fn trace(&self) -> &Trace<Q, A> {
        &self.trace
    }

    /// Return the cursor to the start of a run.
    ///
    /// Regardless of prior state, the active set becomes the initial set
    /// and the trace is replaced by the single start entry.
    pub fn reset(&mut self) {
        self.active = self.automaton.initial().clone();
        self.trace = Trace::start(self.active.clone());
    }

    /// Consume one symbol, advancing the active set set-wise.
    ///
    /// The new active set is the union of destination sets over every
    /// currently active state - an empty union once the active set is
    /// empty, which keeps the cursor in the absorbing empty state for
    /// the rest of the run. On success the step is appended to the
    /// trace and the new active set returned.
    ///
    /// A symbol outside the alphabet fails with [`UnknownSymbolError`]
    /// and leaves the cursor untouched.
    pub fn step(&mut self, symbol: A) -> Result<&BTreeSet<Q>, UnknownSymbolError> {
        if !self.automaton.alphabet().contains(&symbol) {
            return Err(UnknownSymbolError::new(&symbol));
        }

        let next = self.automaton.next_states(&self.active, &symbol);
        self.trace = self.trace.record(TraceEntry {
            input: Input::Symbol(symbol),
            active: next.clone(),
        });
        self.active = next;
        Ok(&self.active)
    }

    /// Whether the active set intersects the accepting set (pure).
    pub fn is_accepted(&self) -> bool {
        self.active
            .iter()
            .any(|state| self.automaton.is_accepting_state(state))
    }
}
