//! Error types for the sweep pipeline.
//!
//! Errors from the storage and account collaborators are classified into
//! [`SweepError`] variants at the client boundary, so callers match on
//! variants instead of inspecting wire error codes.

/// Error type for sweep operations.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    /// The specified bucket does not exist.
    #[error("The specified bucket does not exist: {bucket}")]
    NoSuchBucket {
        /// The bucket name that was not found.
        bucket: String,
    },

    /// The bucket has no lifecycle configuration.
    ///
    /// This is the normal state for most buckets; the lifecycle reader
    /// consumes it and yields an empty rule set.
    #[error("The lifecycle configuration does not exist: {bucket}")]
    NoSuchLifecycleConfiguration {
        /// The bucket whose configuration is absent.
        bucket: String,
    },

    /// Access denied by the storage or account API.
    #[error("Access Denied: {context}")]
    AccessDenied {
        /// The operation that was denied.
        context: String,
    },

    /// An API response was missing a required field.
    #[error("malformed API response: {context}")]
    InvalidResponse {
        /// Description of the malformed response.
        context: String,
    },

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;
