//! Note handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::api::extractors::{require_text, ValidatedJson};
use crate::api::AppState;
use crate::config::{MSG_NOTE_SAVED, MSG_NOTE_TITLE_REQUIRED};
use crate::domain::{NewNote, Note};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Note creation request; timestamps are stored as sent.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SaveNoteRequest {
    #[schema(example = "Lista de compras")]
    pub title: Option<String>,
    #[schema(example = "leite, pão")]
    pub description: Option<String>,
    #[schema(example = "2024-01-01T10:00:00Z")]
    pub created: Option<String>,
    #[schema(example = "2024-01-01T10:00:00Z")]
    pub modified: Option<String>,
}

impl Validate for SaveNoteRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        require_text("title", &self.title, MSG_NOTE_TITLE_REQUIRED)
    }
}

impl From<SaveNoteRequest> for NewNote {
    fn from(request: SaveNoteRequest) -> Self {
        NewNote {
            title: request.title.unwrap_or_default(),
            description: request.description,
            created: request.created,
            modified: request.modified,
        }
    }
}

/// Every stored note
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotesResponse {
    pub list_of_notes: Vec<Note>,
}

/// Create note routes (all protected)
pub fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes))
        .route("/notes/save", post(save_note))
}

/// Save a note
#[utoipa::path(
    post,
    path = "/notes/save",
    tag = "Notes",
    security(("bearer_auth" = [])),
    request_body = SaveNoteRequest,
    responses(
        (status = 201, description = "Note saved", body = MessageResponse),
        (status = 400, description = "Invalid token", body = MessageResponse),
        (status = 401, description = "Missing token", body = MessageResponse),
        (status = 422, description = "Missing title", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn save_note(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SaveNoteRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.note_service.save(NewNote::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(MSG_NOTE_SAVED))))
}

/// List all notes
#[utoipa::path(
    get,
    path = "/notes",
    tag = "Notes",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All notes", body = NotesResponse),
        (status = 400, description = "Invalid token", body = MessageResponse),
        (status = 401, description = "Missing token", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn list_notes(State(state): State<AppState>) -> AppResult<Json<NotesResponse>> {
    let list_of_notes = state.note_service.list().await?;

    Ok(Json(NotesResponse { list_of_notes }))
}
