//! Error types for queue operations

use thiserror::Error;

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, QueueError>;

/// Queue errors
///
/// Every operation that returns a `QueueError` has left the queue exactly as
/// it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("allocation failure: {0}")]
    AllocationFailure(&'static str),
}
