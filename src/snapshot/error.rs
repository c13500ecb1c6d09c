//! Snapshot error types.

use crate::core::DefinitionError;
use thiserror::Error;

/// Errors that can occur during snapshot operations.
///
/// These belong to the snapshot layer, not the core simulation
/// taxonomy - a cursor itself can never produce them.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON failed.
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON failed.
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version of the crate.
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot data failed validation against the target automaton.
    #[error("Snapshot validation failed: {0}")]
    ValidationFailed(String),

    /// The recorded definition no longer constructs a valid automaton.
    #[error(transparent)]
    Definition(#[from] DefinitionError),
}
