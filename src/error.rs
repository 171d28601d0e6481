//! Error types for Brigade
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::RecordId;

/// Result type alias using BrigadeError
pub type Result<T> = std::result::Result<T, BrigadeError>;

/// Unified error type for Brigade operations
#[derive(Debug, Error)]
pub enum BrigadeError {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    /// Target id is absent, or the record is already inactive
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: RecordId },

    /// The store could not grow; nothing was created
    #[error("could not allocate a new {kind} record")]
    AllocationFailure { kind: &'static str },

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("persistence unavailable for {}: {source}", path.display())]
    PersistenceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BrigadeError {
    /// True for the `NotFound` variant
    pub fn is_not_found(&self) -> bool {
        matches!(self, BrigadeError::NotFound { .. })
    }
}
