//! Authentication handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::api::extractors::{require_text, validation_error, ValidatedJson};
use crate::api::AppState;
use crate::config::{
    MSG_EMAIL_REQUIRED, MSG_LOGIN_SUCCESS, MSG_NAME_REQUIRED, MSG_PASSWORD_MISMATCH,
    MSG_PASSWORD_REQUIRED, MSG_USER_CREATED,
};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// User registration request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[schema(example = "Ana")]
    pub name: Option<String>,
    #[schema(example = "a@x.com")]
    pub email: Option<String>,
    #[schema(example = "p1")]
    pub password: Option<String>,
    /// Must equal `password`
    #[schema(example = "p1")]
    pub confirm_password: Option<String>,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        require_text("name", &self.name, MSG_NAME_REQUIRED)?;
        require_text("email", &self.email, MSG_EMAIL_REQUIRED)?;
        require_text("password", &self.password, MSG_PASSWORD_REQUIRED)?;

        if self.password != self.confirm_password {
            return Err(validation_error(
                "confirmPassword",
                "must_match",
                MSG_PASSWORD_MISMATCH,
            ));
        }

        Ok(())
    }
}

/// User login request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "a@x.com")]
    pub email: Option<String>,
    #[schema(example = "p1")]
    pub password: Option<String>,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        require_text("email", &self.email, MSG_EMAIL_REQUIRED)?;
        require_text("password", &self.password, MSG_PASSWORD_REQUIRED)
    }
}

/// Successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Autenticação realizada com sucesso")]
    pub msg: String,
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 422, description = "Missing field, password mismatch or email taken", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state
        .auth_service
        .register(
            payload.name.unwrap_or_default(),
            payload.email.unwrap_or_default(),
            payload.password.unwrap_or_default(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(MSG_USER_CREATED))))
}

/// Login and get a token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 422, description = "Missing field, unknown user or wrong password", body = MessageResponse),
        (status = 500, description = "Token signing failure", body = MessageResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let token = state
        .auth_service
        .login(
            payload.email.unwrap_or_default(),
            payload.password.unwrap_or_default(),
        )
        .await?;

    Ok(Json(LoginResponse {
        msg: MSG_LOGIN_SUCCESS.to_string(),
        token,
    }))
}
