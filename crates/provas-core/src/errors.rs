//! Error types shared by every provas crate.
//!
//! Transport failures live in `provas-client`; this module only covers
//! what can go wrong without touching the network.

use thiserror::Error;

/// Errors raised by the pure domain layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Caller-side input failed validation before a write.
    #[error("Validation error: {0}")]
    Validation(String),
}
