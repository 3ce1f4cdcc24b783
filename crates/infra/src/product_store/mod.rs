//! Product document store boundary.
//!
//! The catalog service talks to persistence only through [`ProductStore`]; the
//! backends here decide how documents and identifiers are represented.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryProductStore;
pub use postgres::PostgresProductStore;
pub use r#trait::{ProductStore, StoreError};
