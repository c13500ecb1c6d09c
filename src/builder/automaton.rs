//! Builder for constructing automata.

use crate::core::{Automaton, DefinitionError, StateId, Symbol, TransitionTable};
use std::collections::BTreeSet;

/// Builder for constructing automata with a fluent API.
///
/// Collects states, symbols, transitions, and the initial/accepting sets
/// in any order; `build()` hands the assembled definition to
/// [`Automaton::new`], which validates it. A builder mistake therefore
/// surfaces as a [`DefinitionError`].
///
/// # Example
///
/// ```rust
/// use nfasim::AutomatonBuilder;
///
/// let automaton = AutomatonBuilder::new()
///     .states([0, 1, 2])
///     .alphabet(['a', 'b'])
///     .transition(0, 'a', [0, 1])
///     .transition(1, 'b', [2])
///     .initial([0])
///     .accepting([2])
///     .build()?;
///
/// assert!(automaton.run("ab".chars())?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct AutomatonBuilder<Q: StateId, A: Symbol> {
    states: BTreeSet<Q>,
    alphabet: BTreeSet<A>,
    transitions: TransitionTable<Q, A>,
    initial: BTreeSet<Q>,
    accepting: BTreeSet<Q>,
}

impl<Q: StateId, A: Symbol> AutomatonBuilder<Q, A> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            states: BTreeSet::new(),
            alphabet: BTreeSet::new(),
            transitions: TransitionTable::new(),
            initial: BTreeSet::new(),
            accepting: BTreeSet::new(),
        }
    }

    /// Add states (required, at least one).
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = Q>,
    {
        self.states.extend(states);
        self
    }

    /// Add a single state.
    pub fn state(mut self, state: Q) -> Self {
        self.states.insert(state);
        self
    }

    /// Add alphabet symbols (required, at least one).
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        self.alphabet.extend(symbols);
        self
    }

    /// Add a transition from one state on one symbol to a set of targets.
    ///
    /// Repeated calls for the same `(from, symbol)` pair union their
    /// targets.
    pub fn transition<I>(mut self, from: Q, symbol: A, targets: I) -> Self
    where
        I: IntoIterator<Item = Q>,
    {
        self.transitions
            .entry(from)
            .or_default()
            .entry(symbol)
            .or_default()
            .extend(targets);
        self
    }

    /// Add initial states (required, at least one).
    pub fn initial<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = Q>,
    {
        self.initial.extend(states);
        self
    }

    /// Add accepting states (may be left empty, meaning no input is
    /// ever accepted).
    pub fn accepting<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = Q>,
    {
        self.accepting.extend(states);
        self
    }

    /// Build the automaton, validating the assembled definition.
    pub fn build(self) -> Result<Automaton<Q, A>, DefinitionError> {
        Automaton::new(
            self.states,
            self.alphabet,
            self.transitions,
            self.initial,
            self.accepting,
        )
    }
}

impl<Q: StateId, A: Symbol> Default for AutomatonBuilder<Q, A> {
    fn default() -> Self {
        Self::new()
    }
}
