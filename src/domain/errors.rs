use thiserror::Error;

/// Simplified error system - contract violations only.
///
/// Data-shaped edge cases (empty series, zero divisors, out-of-range
/// horizons) are handled with clamps and `Option` returns instead of
/// errors; this enum is reserved for invalid static configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

// Simple convenience type alias
pub type DomainResult<T> = Result<T, DomainError>;
