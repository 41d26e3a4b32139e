use thiserror::Error;

use crate::interval::Integer;

/// Errors raised when an interval operation is called outside its contract.
///
/// Both variants signal a caller bug rather than a transient condition, so
/// retrying the same call always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("cannot set max to {requested}: below the interval's min {min}")]
    InvalidBound { min: Integer, requested: Integer },

    #[error("cannot merge an empty sequence of intervals")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, IntervalError>;
