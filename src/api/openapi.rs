//! OpenAPI documentation configuration.
//!
//! Served as JSON at `/api-docs/openapi.json`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, note_handler, user_handler};
use crate::domain::{Note, UserResponse};
use crate::types::MessageResponse;

/// OpenAPI documentation for the notes API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes API",
        version = "0.1.0",
        description = "Note storage and user authentication",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // Note endpoints
        note_handler::save_note,
        note_handler::list_notes,
        // User endpoints
        user_handler::get_user,
    ),
    components(
        schemas(
            MessageResponse,
            Note,
            UserResponse,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            note_handler::SaveNoteRequest,
            note_handler::NotesResponse,
            user_handler::UserEnvelope,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Notes", description = "Saving and listing notes"),
        (name = "Users", description = "User lookup")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for bearer tokens
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
