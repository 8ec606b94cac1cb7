//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::AppState;
use crate::config::MSG_USER_NOT_FOUND;
use crate::domain::UserResponse;
use crate::errors::{AppError, AppResult};

/// Single user, without the password hash
#[derive(Debug, Serialize, ToSchema)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

/// Create user routes (all protected)
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/user/:id", get(get_user))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserEnvelope),
        (status = 400, description = "Invalid token"),
        (status = 401, description = "Missing token"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserEnvelope>> {
    // An id that cannot exist is reported like an unknown one.
    let id = Uuid::parse_str(&id).map_err(|_| AppError::not_found(MSG_USER_NOT_FOUND))?;
    let user = state.user_service.get_user(id).await?;

    Ok(Json(UserEnvelope {
        user: UserResponse::from(user),
    }))
}
