//! Service error types

use thiserror::Error;

/// Error taxonomy shared by every service call
///
/// Each variant maps to a distinct UI surface: `NotFound` and `Forbidden`
/// render dedicated screens, `Validation` stays inline in the owning form,
/// `Network`/`Internal` render the generic failure view with a reload
/// affordance.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (never sent over the network)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport failure (transient)
    #[error("Network error: {0}")]
    Network(String),

    /// Server-side failure or malformed response
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Wrap a transport error
    pub fn network(err: impl ToString) -> Self {
        ServiceError::Network(err.to_string())
    }

    /// Wrap a malformed-response error
    pub fn internal(err: impl ToString) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
