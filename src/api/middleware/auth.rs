//! Bearer token access control.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::AppState;
use crate::errors::{AppError, AppResult};
use crate::services::Claims;

/// Outcome of the access check for a protected route.
#[derive(Debug)]
pub enum Access {
    /// Token verified. The claims are not forwarded to handlers.
    Allow(Claims),
    /// Stop the pipeline and answer with this error.
    Reject(AppError),
}

/// Token part of an `Authorization: Bearer <token>` header.
///
/// Only the second space-separated segment is used; the scheme word is not
/// compared.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.split(' ').nth(1))
        .filter(|token| !token.is_empty())
}

/// Decide whether a request may reach a protected handler.
///
/// No token yields 401 (`Unauthorized`); a token that fails `verify`
/// yields 400 (`InvalidToken`).
pub fn check_access<F>(headers: &HeaderMap, verify: F) -> Access
where
    F: FnOnce(&str) -> AppResult<Claims>,
{
    let Some(token) = bearer_token(headers) else {
        return Access::Reject(AppError::Unauthorized);
    };

    match verify(token) {
        Ok(claims) => Access::Allow(claims),
        Err(_) => Access::Reject(AppError::InvalidToken),
    }
}

/// Token middleware for protected routes.
///
/// Forwards the request unchanged on `Allow`, answers directly on `Reject`.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match check_access(request.headers(), |token| state.auth_service.verify_token(token)) {
        Access::Allow(claims) => {
            tracing::debug!(user_id = %claims.id, path = %request.uri().path(), "Access granted");
            next.run(request).await
        }
        Access::Reject(error) => {
            tracing::debug!(path = %request.uri().path(), reason = %error, "Access rejected");
            error.into_response()
        }
    }
}
