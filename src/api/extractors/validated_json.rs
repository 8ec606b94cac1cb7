//! Validated JSON extractor - Combines deserialization with validation.

use std::borrow::Cow;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::config::MSG_INVALID_BODY;
use crate::errors::AppError;

/// Validated JSON extractor that rejects with a 422 before the handler runs.
///
/// An empty body, or one without a JSON content type, is read as an empty
/// object so the presence checks report the missing field. A JSON body that
/// fails to parse gets a generic message; the parser detail is only logged.
///
/// Request types implement [`Validate`] by hand so that checks run in a
/// fixed order and stop at the first failure:
///
/// ```rust,ignore
/// impl Validate for SaveNoteRequest {
///     fn validate(&self) -> Result<(), ValidationErrors> {
///         require_text("title", &self.title, MSG_NOTE_TITLE_REQUIRED)
///     }
/// }
///
/// async fn save(ValidatedJson(payload): ValidatedJson<SaveNoteRequest>) {
///     // payload.title is present and non-empty
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Request body unreadable");
            AppError::validation(MSG_INVALID_BODY)
        })?;

        let value: T = parse_body(is_json, &body)?;
        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn parse_body<T>(is_json: bool, body: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Malformed JSON body");
        AppError::validation(MSG_INVALID_BODY)
    })
}

/// Build a single-field validation failure carrying a user-facing message.
pub fn validation_error(
    field: &'static str,
    code: &'static str,
    message: &'static str,
) -> ValidationErrors {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));

    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    errors
}

/// Fail when a text field is absent or empty.
pub fn require_text(
    field: &'static str,
    value: &Option<String>,
    message: &'static str,
) -> Result<(), ValidationErrors> {
    match value.as_deref() {
        Some(text) if !text.is_empty() => Ok(()),
        _ => Err(validation_error(field, "required", message)),
    }
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
