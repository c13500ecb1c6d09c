//! Core simulation engine.
//!
//! This module contains the pure core of the engine:
//! - Validated, immutable automaton definitions ([`Automaton`])
//! - Caller-owned simulation state ([`Cursor`])
//! - Step-by-step run records ([`Trace`])
//! - The two-kind error taxonomy ([`DefinitionError`], [`UnknownSymbolError`])
//!
//! All operations are eager, synchronous, and free of I/O. Nothing here
//! retries, logs, or touches shared mutable state.

mod automaton;
mod cursor;
mod error;
mod trace;

pub use automaton::{Automaton, StateId, Symbol, TransitionTable};
pub use cursor::Cursor;
pub use error::{DefinitionError, UnknownSymbolError};
pub use trace::{Input, Trace, TraceEntry};
