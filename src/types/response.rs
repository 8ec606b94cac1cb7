use serde::Serialize;
use utoipa::ToSchema;

/// Message-only response, also the shape of every error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Bem vindo a minha api")]
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
