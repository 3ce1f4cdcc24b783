//! `deptstore-core` — catalog domain building blocks.
//!
//! This crate contains **pure domain** types and rules (no IO, no HTTP, no storage).

pub mod error;
pub mod id;
pub mod product;

pub use error::{CatalogError, CatalogResult};
pub use id::{InvalidProductId, ProductId};
pub use product::{Product, ProductDraft, ProductFields, REQUIRED_FIELDS};
