//! Nfasim: a pure functional NFA simulation engine
//!
//! Nfasim implements the simulation core for nondeterministic finite
//! automata without epsilon-moves, following a "pure core, imperative
//! shell" split: the engine owns the automaton definition and the
//! stepping algorithm, while everything user-facing - input parsing,
//! table widgets, graph rendering - lives outside and talks to the
//! engine through plain values.
//!
//! # Core Concepts
//!
//! - **Automaton**: immutable, validated definition (states, alphabet,
//!   transition table, initial and accepting sets)
//! - **Cursor**: caller-owned simulation state - the active-state set
//!   advanced symbol by symbol with the subset-stepping rule
//! - **Trace**: ordered record of active sets after each consumed
//!   symbol, for stepwise visualization
//! - **Snapshot**: serializable capture of a run, for save and resume
//!
//! # Example
//!
//! ```rust
//! use nfasim::AutomatonBuilder;
//!
//! // Accepts any string of a's followed by "ab".
//! let automaton = AutomatonBuilder::new()
//!     .states([0, 1, 2])
//!     .alphabet(['a', 'b'])
//!     .transition(0, 'a', [0, 1])
//!     .transition(1, 'b', [2])
//!     .initial([0])
//!     .accepting([2])
//!     .build()?;
//!
//! // Whole-string convenience form.
//! assert!(automaton.run("aaab".chars())?);
//!
//! // Decomposed form for single-step visual simulation.
//! let mut cursor = automaton.cursor();
//! cursor.step('a')?;
//! cursor.step('b')?;
//! assert!(cursor.is_accepted());
//! assert_eq!(cursor.trace().len(), 3); // start entry + two steps
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod snapshot;

// Re-export commonly used types
pub use builder::AutomatonBuilder;
pub use core::{
    Automaton, Cursor, DefinitionError, Input, StateId, Symbol, Trace, TraceEntry,
    TransitionTable, UnknownSymbolError,
};
pub use snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};
