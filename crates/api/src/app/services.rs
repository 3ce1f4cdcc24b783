//! Product resource service and its infrastructure wiring.

use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing::instrument;

use deptstore_core::{CatalogError, CatalogResult, Product, ProductDraft, ProductFields, ProductId};
use deptstore_infra::{InMemoryProductStore, PostgresProductStore, ProductStore, StoreError};

use crate::config::Config;

/// Validates catalog requests and executes them against a [`ProductStore`].
///
/// Every operation issues at most one store call and never retries; a store
/// failure is surfaced as [`CatalogError::Persistence`] with its message intact.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Validate the draft and store it as a new product.
    #[instrument(skip_all)]
    pub async fn create(&self, draft: ProductDraft) -> CatalogResult<ProductId> {
        let fields = validated(draft)?;
        let product = self.store.insert(fields).await.map_err(persistence)?;
        tracing::info!(product_id = %product.id, "product created");
        Ok(product.id)
    }

    #[instrument(skip_all)]
    pub async fn list_all(&self) -> CatalogResult<Vec<Product>> {
        self.store.find_all().await.map_err(persistence)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> CatalogResult<Product> {
        self.store
            .find_by_id(id)
            .await
            .map_err(persistence)?
            .ok_or(CatalogError::NotFound)
    }

    /// Replace every field of an existing product.
    ///
    /// Validation happens before the store is touched, so an incomplete
    /// payload is rejected even when the id is unknown.
    #[instrument(skip(self, draft))]
    pub async fn update_by_id(&self, id: &str, draft: ProductDraft) -> CatalogResult<Product> {
        let fields = validated(draft)?;
        let product = self
            .store
            .update_by_id(id, fields)
            .await
            .map_err(persistence)?
            .ok_or(CatalogError::NotFound)?;
        tracing::info!(product_id = %product.id, "product updated");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: &str) -> CatalogResult<()> {
        let product = self
            .store
            .delete_by_id(id)
            .await
            .map_err(persistence)?
            .ok_or(CatalogError::NotFound)?;
        tracing::info!(product_id = %product.id, "product deleted");
        Ok(())
    }
}

fn validated(draft: ProductDraft) -> CatalogResult<ProductFields> {
    let missing = draft.missing_fields();
    if !missing.is_empty() {
        tracing::debug!(?missing, "rejecting incomplete product payload");
    }
    draft.validate()
}

fn persistence(err: StoreError) -> CatalogError {
    tracing::error!(error = %err, "product store call failed");
    CatalogError::persistence(err.to_string())
}

/// Pick and connect the product store described by `config`.
///
/// With a `DATABASE_URL` the Postgres store is used and its table created if
/// needed; otherwise products are kept in memory for the life of the process.
pub async fn build_services(config: &Config) -> anyhow::Result<Arc<ProductService>> {
    let store: Arc<dyn ProductStore> = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(url)
                .await
                .context("failed to connect to Postgres")?;

            let store = PostgresProductStore::new(pool);
            store
                .migrate()
                .await
                .context("failed to create products table")?;
            tracing::info!("using Postgres product store");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; products are kept in memory only");
            Arc::new(InMemoryProductStore::new())
        }
    };

    Ok(Arc::new(ProductService::new(store)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose every call fails, to exercise the persistence error path.
    struct FailingStore;

    #[async_trait::async_trait]
    impl ProductStore for FailingStore {
        async fn insert(&self, _fields: ProductFields) -> Result<Product, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn find_by_id(&self, _id: &str) -> Result<Option<Product>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn update_by_id(
            &self,
            _id: &str,
            _fields: ProductFields,
        ) -> Result<Option<Product>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn delete_by_id(&self, _id: &str) -> Result<Option<Product>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn service() -> (ProductService, Arc<InMemoryProductStore>) {
        let store = Arc::new(InMemoryProductStore::new());
        (ProductService::new(store.clone()), store)
    }

    fn cerveja() -> ProductDraft {
        ProductDraft {
            name: Some("Cerveja".to_string()),
            description: Some("Cerveja artesanal".to_string()),
            color: Some("Amarela".to_string()),
            weight: Some(0.5),
            category: Some("Bebida".to_string()),
            price: Some(10.0),
            registration_date: Some("2023-06-01".to_string()),
        }
    }

    fn vinho() -> ProductDraft {
        ProductDraft {
            name: Some("Vinho".to_string()),
            description: Some("Vinho tinto seco".to_string()),
            color: Some("Vermelho".to_string()),
            weight: Some(0.75),
            category: Some("Bebida".to_string()),
            price: Some(59.9),
            registration_date: Some("2023-07-15".to_string()),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips_all_fields() {
        let (service, _store) = service();

        let id = service.create(cerveja()).await.unwrap();
        let product = service.get_by_id(&id.to_string()).await.unwrap();

        assert_eq!(product.id, id);
        assert_eq!(ProductDraft::from(product.fields), cerveja());
    }

    #[tokio::test]
    async fn create_with_missing_fields_writes_nothing() {
        let (service, store) = service();
        let draft = ProductDraft {
            name: Some("X".to_string()),
            ..ProductDraft::default()
        };

        let err = service.create(draft).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn list_all_includes_created_products() {
        let (service, _store) = service();
        let a = service.create(cerveja()).await.unwrap();
        let b = service.create(vinho()).await.unwrap();

        let ids: Vec<_> = service.list_all().await.unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&a) && ids.contains(&b));
    }

    #[tokio::test]
    async fn update_is_a_full_replacement() {
        let (service, _store) = service();
        let id = service.create(cerveja()).await.unwrap().to_string();

        let updated = service.update_by_id(&id, vinho()).await.unwrap();
        assert_eq!(ProductDraft::from(updated.fields), vinho());

        let fetched = service.get_by_id(&id).await.unwrap();
        assert_eq!(fetched.id.to_string(), id);
        assert_eq!(ProductDraft::from(fetched.fields), vinho());
    }

    #[tokio::test]
    async fn update_validates_before_touching_the_store() {
        let (service, _store) = service();
        let id = service.create(cerveja()).await.unwrap().to_string();

        let mut incomplete = vinho();
        incomplete.price = None;
        let err = service.update_by_id(&id, incomplete).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));

        // Unchanged, and validation wins over an unknown id too.
        assert_eq!(ProductDraft::from(service.get_by_id(&id).await.unwrap().fields), cerveja());
        let unknown = ProductId::new().to_string();
        let err = service.update_by_id(&unknown, ProductDraft::default()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let (service, _store) = service();
        let unknown = ProductId::new().to_string();

        assert_eq!(service.get_by_id(&unknown).await.unwrap_err(), CatalogError::NotFound);
        assert_eq!(service.update_by_id(&unknown, cerveja()).await.unwrap_err(), CatalogError::NotFound);
        assert_eq!(service.delete_by_id(&unknown).await.unwrap_err(), CatalogError::NotFound);
    }

    #[tokio::test]
    async fn delete_is_not_idempotent() {
        let (service, store) = service();
        let id = service.create(cerveja()).await.unwrap().to_string();

        service.delete_by_id(&id).await.unwrap();
        assert!(store.is_empty().unwrap());
        assert_eq!(service.delete_by_id(&id).await.unwrap_err(), CatalogError::NotFound);
    }

    #[tokio::test]
    async fn malformed_ids_surface_as_persistence_errors() {
        let (service, _store) = service();

        let err = service.get_by_id("nonexistent").await.unwrap_err();
        match err {
            CatalogError::Persistence(msg) => assert!(msg.contains("nonexistent")),
            other => panic!("expected persistence error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn store_failures_carry_the_underlying_message() {
        let service = ProductService::new(Arc::new(FailingStore));
        let expected = CatalogError::Persistence("store unavailable: connection refused".to_string());

        assert_eq!(service.create(cerveja()).await.unwrap_err(), expected);
        assert_eq!(service.list_all().await.unwrap_err(), expected);
        assert_eq!(service.get_by_id("any").await.unwrap_err(), expected);
        assert_eq!(service.update_by_id("any", cerveja()).await.unwrap_err(), expected);
        assert_eq!(service.delete_by_id("any").await.unwrap_err(), expected);
    }

    #[tokio::test]
    async fn build_services_without_database_uses_memory() {
        let config = Config::from_lookup(|_| None).unwrap();
        let service = build_services(&config).await.unwrap();

        assert!(service.list_all().await.unwrap().is_empty());
    }
}
