use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::dto::{self, MessageResponse, UpdatedResponse};
use crate::app::errors;
use crate::app::extract::ProductBody;
use crate::app::services::ProductService;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product).put(update_product).delete(delete_product))
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/produto",
    tag = "produto",
    request_body(
        content = dto::ProductDraft,
        description = "All seven fields, as JSON or as an urlencoded form",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Product created", body = MessageResponse),
        (status = 422, description = "Missing fields or unreadable body", body = dto::ErrorResponse),
        (status = 500, description = "Store failure", body = dto::ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<Arc<ProductService>>,
    ProductBody(body): ProductBody,
) -> axum::response::Response {
    match service.create(body).await {
        Ok(_id) => (StatusCode::CREATED, Json(MessageResponse::new(dto::CREATED_MESSAGE))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// List every product.
#[utoipa::path(
    get,
    path = "/produto",
    tag = "produto",
    responses(
        (status = 200, description = "All stored products", body = [deptstore_core::Product]),
        (status = 500, description = "Store failure", body = dto::ErrorResponse)
    )
)]
pub async fn list_products(
    Extension(service): Extension<Arc<ProductService>>,
) -> axum::response::Response {
    match service.list_all().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// Fetch one product by id.
#[utoipa::path(
    get,
    path = "/produto/{id}",
    tag = "produto",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = deptstore_core::Product),
        (status = 404, description = "No product with this id", body = MessageResponse),
        (status = 500, description = "Malformed id or store failure", body = dto::ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<Arc<ProductService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match service.get_by_id(&id).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// Replace every field of a product.
#[utoipa::path(
    put,
    path = "/produto/{id}",
    tag = "produto",
    params(("id" = String, Path, description = "Product id")),
    request_body(
        content = dto::ProductDraft,
        description = "All seven fields, as JSON or as an urlencoded form",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Product replaced", body = UpdatedResponse),
        (status = 404, description = "No product with this id", body = MessageResponse),
        (status = 422, description = "Missing fields or unreadable body", body = dto::ErrorResponse),
        (status = 500, description = "Malformed id or store failure", body = dto::ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<Arc<ProductService>>,
    Path(id): Path<String>,
    ProductBody(body): ProductBody,
) -> axum::response::Response {
    match service.update_by_id(&id, body).await {
        Ok(produto) => (
            StatusCode::OK,
            Json(UpdatedResponse {
                message: dto::UPDATED_MESSAGE.to_string(),
                produto,
            }),
        )
            .into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/produto/{id}",
    tag = "produto",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "No product with this id", body = MessageResponse),
        (status = 500, description = "Malformed id or store failure", body = dto::ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<Arc<ProductService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match service.delete_by_id(&id).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::new(dto::DELETED_MESSAGE))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
