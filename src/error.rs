//! Error type for the checked map operations.

use thiserror::Error;

/// The error raised when a checked operation receives the absent sentinel.
///
/// Mirrors dictionary contracts from hosts where keys and values are nullable
/// references: `None` stands in for the null argument and is rejected up
/// front, before any mutation, rather than stored or searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The named argument was the absent sentinel.
    #[error("invalid argument: {0} must not be absent")]
    InvalidArgument(&'static str),
}
