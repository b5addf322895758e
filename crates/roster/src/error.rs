//! # Roster Errors
//!
//! This module defines the [`RosterError`] enum used throughout the roster
//! crate for reporting validation and serialization failures.

use thiserror::Error;

/// A specialized error enum for record-modeling failures.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A person was constructed with a negative age.
    #[error("Age must be >= 0, got {age}")]
    InvalidAge { age: i32 },

    /// JSON encoding or decoding failed.
    #[error("Malformed employee record: {source}")]
    Format {
        #[from]
        source: serde_json::Error,
    },
}
