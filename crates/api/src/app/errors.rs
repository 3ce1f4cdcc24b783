use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use deptstore_core::CatalogError;

use crate::app::dto::{self, ErrorResponse, MessageResponse};

/// Map a catalog failure onto its HTTP status and JSON body.
///
/// Not-found answers carry `{message}`; everything else carries `{error}`.
pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    match err {
        CatalogError::Validation(msg) => json_error(StatusCode::UNPROCESSABLE_ENTITY, msg),
        CatalogError::NotFound => json_message(StatusCode::NOT_FOUND, dto::NOT_FOUND_MESSAGE),
        CatalogError::Persistence(msg) => json_error(StatusCode::INTERNAL_SERVER_ERROR, msg),
    }
}

/// Unparseable request bodies are client errors, answered in the same shape as validation.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    tracing::debug!(error = %rejection.body_text(), "rejecting malformed JSON body");
    json_error(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
}

pub fn form_rejection_to_response(rejection: FormRejection) -> axum::response::Response {
    tracing::debug!(error = %rejection.body_text(), "rejecting malformed form body");
    json_error(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
}

pub fn json_error(status: StatusCode, error: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(ErrorResponse { error: error.into() })).into_response()
}

pub fn json_message(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(MessageResponse::new(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        let cases = [
            (CatalogError::validation("Todos os campos são obrigatórios!"), StatusCode::UNPROCESSABLE_ENTITY),
            (CatalogError::not_found(), StatusCode::NOT_FOUND),
            (CatalogError::persistence("pool timed out"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(catalog_error_to_response(err).status(), status);
        }
    }
}
