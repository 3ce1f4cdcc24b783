use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app::{dto, errors};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

/// Unknown routes still answer with a JSON body.
pub async fn fallback() -> axum::response::Response {
    errors::json_message(StatusCode::NOT_FOUND, dto::ROUTE_NOT_FOUND_MESSAGE)
}
