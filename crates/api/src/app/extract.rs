//! Request body extraction for product payloads.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::Response,
    Form, Json,
};

use crate::app::dto::ProductDraft;
use crate::app::errors;

/// A product payload sent either as JSON or as an HTML form.
///
/// `application/x-www-form-urlencoded` bodies are decoded as a form; every
/// other request goes through the JSON extractor, which also reports a wrong
/// or missing content type. Rejections are answered with 422 `{error}`.
#[derive(Debug)]
pub struct ProductBody(pub ProductDraft);

#[async_trait]
impl<S> FromRequest<S> for ProductBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(draft) = Form::<ProductDraft>::from_request(req, state)
                .await
                .map_err(errors::form_rejection_to_response)?;
            Ok(Self(draft))
        } else {
            let Json(draft) = Json::<ProductDraft>::from_request(req, state)
                .await
                .map_err(errors::json_rejection_to_response)?;
            Ok(Self(draft))
        }
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/x-www-form-urlencoded"))
}
