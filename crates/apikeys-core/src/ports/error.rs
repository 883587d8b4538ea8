//! Error types for API key operations.

use thiserror::Error;

/// Errors from API key operations.
///
/// One undifferentiated kind per operation. Transport details (status
/// codes, connection failures, malformed bodies) are collapsed into the
/// kind of the operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    /// Listing or reading keys failed.
    #[error("Failed to fetch API keys")]
    FetchFailed,

    /// Creating a key failed.
    #[error("Failed to create API key")]
    CreateFailed,

    /// Deleting a key failed.
    #[error("Failed to delete API key")]
    DeleteFailed,
}

/// Result type alias for API key operations.
pub type ApiKeyResult<T> = Result<T, ApiKeyError>;
