//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the product service and store selection
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response bodies and fixed messages
//! - `errors.rs`: consistent error responses
//! - `extract.rs`: JSON or form product payloads
//! - `docs.rs`: OpenAPI document and Swagger UI

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod docs;
pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod services;

use services::ProductService;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: Arc<ProductService>) -> Router {
    routes::router()
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_log_middleware))
                .layer(axum::middleware::from_fn(middleware::cors_middleware)),
        )
}
