//! Core errors.

use thiserror::Error;

/// Core error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`showcase_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: showcase_ghapi_interface::ApiError,
    },
}

impl From<showcase_ghapi_interface::ApiError> for DomainError {
    fn from(e: showcase_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
