//! Error types for automaton construction and simulation.
//!
//! The engine has exactly two failure kinds: a definition can be rejected
//! at construction time, and a step can be rejected for a symbol outside
//! the alphabet. Nothing fails mid-simulation for any other reason, and
//! nothing here is fatal to the hosting process - callers decide whether
//! to abort or prompt for corrected input.

use thiserror::Error;

/// Errors raised when an automaton definition violates its invariants.
///
/// Raised only at construction time; a rejected definition never produces
/// an automaton, so these can never surface mid-simulation. The offending
/// state or symbol is carried in its `Debug` rendering so the error is
/// self-describing regardless of the caller's state and symbol types.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The state set is empty.
    #[error("Automaton has no states")]
    EmptyStates,

    /// The alphabet is empty.
    #[error("Automaton has an empty alphabet")]
    EmptyAlphabet,

    /// The initial set is empty.
    #[error("Automaton has no initial states")]
    EmptyInitial,

    /// An initial state is not a member of the state set.
    #[error("Initial state {state} is not in the state set")]
    UnknownInitialState { state: String },

    /// An accepting state is not a member of the state set.
    #[error("Accepting state {state} is not in the state set")]
    UnknownAcceptingState { state: String },

    /// A transition reads from a state outside the state set.
    #[error("Transition source {state} is not in the state set")]
    UnknownTransitionState { state: String },

    /// A transition is keyed on a symbol outside the alphabet.
    #[error("Transition symbol {symbol} is not in the alphabet")]
    UnknownTransitionSymbol { symbol: String },

    /// A transition leads to a state outside the state set.
    #[error("Transition {state} --{symbol}--> {target} leads outside the state set")]
    UnknownTransitionTarget {
        state: String,
        symbol: String,
        target: String,
    },
}

/// Error raised when a step is attempted on a symbol outside the alphabet.
///
/// The failing call leaves the cursor exactly as it was - no half-applied
/// step - so the caller can retry with a corrected symbol or abort.
#[derive(Debug, Error)]
#[error("Symbol {symbol} is not in the alphabet")]
pub struct UnknownSymbolError {
    /// The rejected symbol, in its `Debug` rendering.
    pub symbol: String,
}

impl UnknownSymbolError {
    pub(crate) fn new(symbol: &impl std::fmt::Debug) -> Self {
        Self {
            symbol: format!("{symbol:?}"),
        }
    }
}
