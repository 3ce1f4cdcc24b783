//! OpenAPI document for the product routes, served with Swagger UI.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use deptstore_core::{Product, ProductDraft, ProductFields};

use crate::app::dto::{ErrorResponse, MessageResponse, UpdatedResponse};
use crate::app::routes::products;

pub const DOCS_PATH: &str = "/api-docs";
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Loja de Departamentos API",
        version = "1.0.0",
        description = "API para gerenciar produtos de uma loja de departamentos"
    ),
    paths(
        products::create_product,
        products::list_products,
        products::get_product,
        products::update_product,
        products::delete_product
    ),
    components(schemas(
        Product,
        ProductDraft,
        ProductFields,
        MessageResponse,
        ErrorResponse,
        UpdatedResponse
    )),
    tags((name = "produto", description = "Department-store product catalog"))
)]
pub struct ApiDoc;

/// Swagger UI at `/api-docs`, backed by the generated document.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}
