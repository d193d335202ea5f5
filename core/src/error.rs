//! Error module - failures converting untrusted activity data

use thiserror::Error;

/// Errors raised when activity data from an untrusted source is converted
/// into the engine's unsigned types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("{field} must not be negative (got {value})")]
    NegativeCount { field: &'static str, value: i64 },

    #[error("{field} is too large (got {value})")]
    CountOverflow { field: &'static str, value: i64 },
}
