//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder for assembling automaton
//! definitions piece by piece, with validation deferred to `build()`.

mod automaton;

pub use automaton::AutomatonBuilder;
