//! Postgres-backed product document store.
//!
//! Each product is one row of the `products` table: the id as a `UUID`
//! primary key and the seven fields as a `JSONB` document. Every operation is
//! a single statement, so no explicit transactions are needed.
//!
//! ## Error Mapping
//!
//! | SQLx Error | StoreError |
//! |------------|------------|
//! | PoolClosed | `Unavailable` |
//! | Database / Io / other | `Database { operation, message }` |
//! | Row decode of `document` | `Serialization` |
//!
//! Failures are returned, not logged here; the caller decides how loudly to
//! report them.

use std::sync::Arc;

use serde_json::Value as JsonValue;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use deptstore_core::{Product, ProductFields, ProductId};

use super::r#trait::{ProductStore, StoreError};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id UUID PRIMARY KEY,
    document JSONB NOT NULL
)
"#;

/// Postgres-backed product store.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: Arc<PgPool>,
}

impl PostgresProductStore {
    /// Create a new PostgresProductStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Create the `products` table if it does not exist yet.
    #[instrument(skip(self), err)]
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("migrate", e))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self, fields))]
    async fn insert(&self, fields: ProductFields) -> Result<Product, StoreError> {
        let id = ProductId::new();
        let document = encode(&fields)?;

        sqlx::query("INSERT INTO products (id, document) VALUES ($1, $2)")
            .bind(id.as_uuid())
            .bind(document)
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("insert", e))?;

        Ok(Product::new(id, fields))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query("SELECT id, document FROM products ORDER BY id ASC")
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("find_all", e))?;

        let mut products = Vec::with_capacity(rows.len());
        for row in rows {
            products.push(decode_row("find_all", &row)?);
        }
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let id: ProductId = id.parse()?;

        let row = sqlx::query("SELECT id, document FROM products WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("find_by_id", e))?;

        row.map(|r| decode_row("find_by_id", &r)).transpose()
    }

    #[instrument(skip(self, fields))]
    async fn update_by_id(
        &self,
        id: &str,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError> {
        let id: ProductId = id.parse()?;
        let document = encode(&fields)?;

        let row = sqlx::query("UPDATE products SET document = $2 WHERE id = $1 RETURNING id, document")
            .bind(id.as_uuid())
            .bind(document)
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("update_by_id", e))?;

        row.map(|r| decode_row("update_by_id", &r)).transpose()
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let id: ProductId = id.parse()?;

        let row = sqlx::query("DELETE FROM products WHERE id = $1 RETURNING id, document")
            .bind(id.as_uuid())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_by_id", e))?;

        row.map(|r| decode_row("delete_by_id", &r)).transpose()
    }
}

fn encode(fields: &ProductFields) -> Result<JsonValue, StoreError> {
    serde_json::to_value(fields).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn decode_row(operation: &'static str, row: &sqlx::postgres::PgRow) -> Result<Product, StoreError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| map_sqlx_error(operation, e))?;
    let document: JsonValue = row
        .try_get("document")
        .map_err(|e| map_sqlx_error(operation, e))?;

    let fields: ProductFields = serde_json::from_value(document)
        .map_err(|e| StoreError::Serialization(format!("product {id}: {e}")))?;

    Ok(Product::new(ProductId::from_uuid(id), fields))
}

fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolClosed => {
            StoreError::Unavailable(format!("connection pool closed in {}", operation))
        }
        sqlx::Error::Database(db_err) => StoreError::Database {
            operation,
            message: db_err.message().to_string(),
        },
        other => StoreError::Database {
            operation,
            message: other.to_string(),
        },
    }
}
