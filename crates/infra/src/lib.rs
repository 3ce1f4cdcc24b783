//! Infrastructure layer: product document persistence.

pub mod product_store;

pub use product_store::{InMemoryProductStore, PostgresProductStore, ProductStore, StoreError};
