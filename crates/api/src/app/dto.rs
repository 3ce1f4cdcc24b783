use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use deptstore_core::Product;

pub use deptstore_core::ProductDraft;

pub const CREATED_MESSAGE: &str = "Produto criado com sucesso!";
pub const UPDATED_MESSAGE: &str = "Produto atualizado com sucesso!";
pub const DELETED_MESSAGE: &str = "Produto deletado com sucesso!";
pub const NOT_FOUND_MESSAGE: &str = "Produto não encontrado!";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Rota não encontrada!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of validation, malformed-request and persistence failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of a successful `PUT /produto/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdatedResponse {
    pub message: String,
    pub produto: Product,
}
