//! Snapshot and resume functionality for simulations.
//!
//! A snapshot captures a paused run - the full automaton definition plus
//! the trace so far - as a serializable value, so a front end can save a
//! simulation and pick it up again later. Cursors borrow their automaton
//! and are not themselves serializable; on resume the caller rebuilds the
//! automaton (re-validating the definition) and the snapshot rebuilds a
//! cursor against it.

use crate::core::{
    Automaton, Cursor, DefinitionError, Input, StateId, Symbol, Trace, TransitionTable,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of a simulation in progress.
///
/// Holds the definition components rather than an [`Automaton`] so that
/// deserialized data is re-validated through [`Automaton::new`] before
/// anything runs over it.
///
/// # Example
///
/// ```rust
/// use nfasim::{AutomatonBuilder, Snapshot};
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
/// let mut cursor = automaton.cursor();
/// cursor.step('a')?;
///
/// let json = Snapshot::capture(&cursor).to_json()?;
///
/// // Later, possibly in another process:
/// let snapshot: Snapshot<i32, char> = Snapshot::from_json(&json)?;
/// let restored = snapshot.automaton()?;
/// let mut cursor = snapshot.resume(&restored)?;
/// cursor.step('b')?;
/// assert!(cursor.is_accepted());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<Q: StateId, A: Symbol> {
    /// Snapshot format version.
    pub version: u32,

    /// State set of the automaton.
    pub states: BTreeSet<Q>,

    /// Alphabet of the automaton.
    pub alphabet: BTreeSet<A>,

    /// Transition table of the automaton.
    pub transitions: TransitionTable<Q, A>,

    /// Initial-state set.
    pub initial: BTreeSet<Q>,

    /// Accepting-state set.
    pub accepting: BTreeSet<Q>,

    /// The trace recorded up to the capture point.
    pub trace: Trace<Q, A>,
}

impl<Q: StateId, A: Symbol> Snapshot<Q, A> {
    /// Capture a cursor's position together with its automaton's
    /// definition.
    pub fn capture(cursor: &Cursor<'_, Q, A>) -> Self {
        let automaton = cursor.automaton();
        Self {
            version: SNAPSHOT_VERSION,
            states: automaton.states().clone(),
            alphabet: automaton.alphabet().clone(),
            transitions: automaton.transitions().clone(),
            initial: automaton.initial().clone(),
            accepting: automaton.accepting().clone(),
            trace: cursor.trace().clone(),
        }
    }

    /// Encode the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Rebuild the recorded automaton definition, re-validating it.
    pub fn automaton(&self) -> Result<Automaton<Q, A>, DefinitionError> {
        Automaton::new(
            self.states.clone(),
            self.alphabet.clone(),
            self.transitions.clone(),
            self.initial.clone(),
            self.accepting.clone(),
        )
    }

    /// Rebuild a cursor positioned where the snapshot was captured.
    ///
    /// The caller supplies the live automaton (normally from
    /// [`Snapshot::automaton`]). Fails if the snapshot version is
    /// unsupported, the trace is malformed, or the trace references
    /// states the automaton does not have.
    pub fn resume<'a>(
        &self,
        automaton: &'a Automaton<Q, A>,
    ) -> Result<Cursor<'a, Q, A>, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let first = self
            .trace
            .entries()
            .first()
            .ok_or_else(|| SnapshotError::ValidationFailed("trace is empty".to_string()))?;
        if first.input != Input::Start {
            return Err(SnapshotError::ValidationFailed(
                "trace does not begin with the start marker".to_string(),
            ));
        }

        for entry in self.trace.entries() {
            for state in &entry.active {
                if !automaton.states().contains(state) {
                    return Err(SnapshotError::ValidationFailed(format!(
                        "traced state {state:?} is not in the automaton"
                    )));
                }
            }
        }

        // entries() is non-empty here, so last() always yields.
        let active = self
            .trace
            .last()
            .map(|entry| entry.active.clone())
            .unwrap_or_default();

        Ok(Cursor::at_position(automaton, active, self.trace.clone()))
    }
}
