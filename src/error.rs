//! Errors raised by set, partition and graph operations.

use thiserror::Error;

/// The ways a set-theoretic operation can fail.
///
/// Every operation fails at the call that detects the violation. Nothing is retried and no partial
/// result is ever returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SetError {
    /// A precondition was violated: an element is not a member, a structural constraint does not
    /// hold, or a set has the wrong cardinality.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An element was requested from an empty set.
    #[error("tried to get an element from an empty set")]
    EmptySet,

    /// A requested element could not be found.
    #[error("element not found")]
    NotFound,

    /// The operation cannot be carried out on this structure.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

/// Result type for fallible operations in this crate.
pub type Result<T, E = SetError> = std::result::Result<T, E>;

/// Fails with [`SetError::InvalidArgument`] when `condition` is false.
///
/// ## Errors
///
/// See above.
pub fn check_argument(condition: bool, message: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(SetError::InvalidArgument(message))
    }
}
