//! Error types: the invalid-input error returned by every mover, and the
//! parse error for strategy names.
//!
//! Movers have exactly one failure kind. The variants only say *why* the
//! input was rejected; callers that do not care can match on `Err(_)`.

use thiserror::Error;

/// Rejected input. No element was read or written when this is returned.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    /// No array was supplied.
    #[error("invalid input: array reference is absent")]
    Absent,
    /// The element count is zero.
    #[error("invalid input: element count is zero")]
    Empty,
    /// The declared element count does not match the array length.
    #[error("invalid input: declared size {size} does not match array length {len}")]
    SizeMismatch {
        /// Count passed by the caller.
        size: usize,
        /// Actual number of elements in the array.
        len: usize,
    },
}

/// A strategy name that matches no known mover.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown strategy `{0}` (expected runtime-optimized or space-optimized)")]
pub struct UnknownStrategy(pub String);
