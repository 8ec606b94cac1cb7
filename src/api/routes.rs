//! Application route configuration.

use axum::{middleware, response::Json, routing::get, Router};
use utoipa::OpenApi;

use super::handlers::{auth_routes, note_routes, user_routes};
use super::middleware::auth_middleware;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::MSG_WELCOME;
use crate::types::MessageResponse;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    // Notes and user lookup require a token
    let protected = Router::new()
        .merge(note_routes())
        .merge(user_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/", get(root))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/auth", auth_routes())
        .merge(protected)
        .with_state(state)
}

/// Root endpoint
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(MSG_WELCOME))
}

/// OpenAPI document for the public surface
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
