use axum::{routing::get, Router};

use crate::app::docs;

pub mod products;
pub mod system;

/// Router for every endpoint the API serves.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/produto", products::router())
        .merge(docs::swagger_ui())
        .fallback(system::fallback)
}
