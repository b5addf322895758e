//! # Ops Errors
//!
//! This module defines the [`OpsError`] enum used throughout the ops crate
//! for reporting range and encoding failures.

use thiserror::Error;

/// A specialized error enum for primitive-operation failures.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Slice bounds remained out of order after clamping at the edges.
    #[error("Slice bounds are out of order: start {start} > end {end}")]
    InvalidRange { start: isize, end: isize },

    /// A byte range landed inside a multi-byte UTF-8 sequence.
    #[error("Byte range {start}..{end} does not fall on a character boundary")]
    NotCharBoundary { start: usize, end: usize },

    /// An index pointed outside the buffer.
    #[error("Index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A byte buffer could not be decoded as UTF-8 text.
    #[error("Byte buffer is not valid UTF-8: {source}")]
    InvalidUtf8 {
        #[from]
        source: std::string::FromUtf8Error,
    },
}
