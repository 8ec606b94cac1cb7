//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion. Every error renders as
//! `{"msg": "..."}` with a localized, user-facing message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::config::{
    MSG_ACCESS_DENIED, MSG_INTERNAL_ERROR, MSG_INVALID_TOKEN, MSG_SERVER_UNAVAILABLE,
};
use crate::types::MessageResponse;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Access control
    #[error("Access denied")]
    Unauthorized,

    #[error("Invalid token")]
    InvalidToken,

    // Client input (missing fields, bad credentials, taken email)
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Token signing error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),

    /// Listing failed; rendered with its own message.
    #[error("Service unavailable")]
    Unavailable,

    /// Startup configuration problem, never sent to clients.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_)
            | AppError::Jwt(_)
            | AppError::Internal(_)
            | AppError::Unavailable
            | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Unauthorized => MSG_ACCESS_DENIED.to_string(),
            AppError::InvalidToken => MSG_INVALID_TOKEN.to_string(),
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),

            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                MSG_INTERNAL_ERROR.to_string()
            }
            AppError::Jwt(e) => {
                tracing::error!("JWT error: {:?}", e);
                MSG_INTERNAL_ERROR.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                MSG_INTERNAL_ERROR.to_string()
            }
            AppError::Unavailable => MSG_SERVER_UNAVAILABLE.to_string(),
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                MSG_INTERNAL_ERROR.to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(MessageResponse::new(self.user_message()))).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}
