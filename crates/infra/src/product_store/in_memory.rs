use std::collections::BTreeMap;
use std::sync::RwLock;

use deptstore_core::{Product, ProductFields, ProductId};

use super::r#trait::{ProductStore, StoreError};

/// In-memory product store for tests/dev.
///
/// Documents are keyed by `ProductId`; ids are time-ordered, so `find_all`
/// returns products roughly in creation order.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<BTreeMap<ProductId, ProductFields>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.inner.read().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("in-memory product store lock poisoned".to_string())
}

#[async_trait::async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, fields: ProductFields) -> Result<Product, StoreError> {
        let id = ProductId::new();
        let mut map = self.inner.write().map_err(poisoned)?;
        map.insert(id, fields.clone());
        tracing::debug!(product_id = %id, "inserted product document");
        Ok(Product::new(id, fields))
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map
            .iter()
            .map(|(id, fields)| Product::new(*id, fields.clone()))
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let id: ProductId = id.parse()?;
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.get(&id).map(|fields| Product::new(id, fields.clone())))
    }

    async fn update_by_id(
        &self,
        id: &str,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError> {
        let id: ProductId = id.parse()?;
        let mut map = self.inner.write().map_err(poisoned)?;
        match map.get_mut(&id) {
            Some(stored) => {
                *stored = fields.clone();
                tracing::debug!(product_id = %id, "replaced product document");
                Ok(Some(Product::new(id, fields)))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let id: ProductId = id.parse()?;
        let mut map = self.inner.write().map_err(poisoned)?;
        Ok(map.remove(&id).map(|fields| {
            tracing::debug!(product_id = %id, "deleted product document");
            Product::new(id, fields)
        }))
    }
}
