//! Catalog error model.

use thiserror::Error;

/// Result type used by catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Classified failure of a catalog operation.
///
/// Every failure is terminal for the request that triggered it; nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// One or more required fields were absent on create/update.
    #[error("{0}")]
    Validation(String),

    /// The requested identifier does not correspond to a stored product.
    #[error("not found")]
    NotFound,

    /// The persistence layer failed; carries the underlying message verbatim.
    #[error("{0}")]
    Persistence(String),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
