use std::sync::Arc;

use thiserror::Error;

use deptstore_core::{InvalidProductId, Product, ProductFields};

/// Failure reported by a product store backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The raw identifier could not be interpreted by the backend.
    #[error("{0}")]
    InvalidId(#[from] InvalidProductId),

    /// The backend cannot serve requests (poisoned lock, closed pool, ...).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("database error in {operation}: {message}")]
    Database { operation: &'static str, message: String },

    /// A stored document could not be encoded or decoded.
    #[error("document serialization failed: {0}")]
    Serialization(String),
}

/// Document persistence for products.
///
/// Identifiers are passed exactly as the caller received them. Parsing them is
/// the backend's job, and a malformed one is reported as
/// [`StoreError::InvalidId`] rather than as "not found".
///
/// Every method is a single, logically atomic call. There is no versioning;
/// concurrent writers to the same id race and the last write wins.
#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    /// Store a new document under a freshly assigned id.
    async fn insert(&self, fields: ProductFields) -> Result<Product, StoreError>;

    /// Every stored document, in backend-defined order.
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Replace every field of the document, keeping its id.
    ///
    /// Returns the new document, or `None` if no document has this id.
    async fn update_by_id(
        &self,
        id: &str,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError>;

    /// Remove the document and return what was removed.
    async fn delete_by_id(&self, id: &str) -> Result<Option<Product>, StoreError>;
}

#[async_trait::async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn insert(&self, fields: ProductFields) -> Result<Product, StoreError> {
        (**self).insert(fields).await
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn update_by_id(
        &self,
        id: &str,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError> {
        (**self).update_by_id(id, fields).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        (**self).delete_by_id(id).await
    }
}
