//! Shared helpers for router-level tests.
//!
//! Repositories are in-memory so the full request cycle runs without a
//! database.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use notes_api::config::MSG_EMAIL_TAKEN;
use notes_api::domain::{NewNote, Note, User};
use notes_api::errors::{AppError, AppResult};
use notes_api::infra::{NoteRepository, UserRepository};
use notes_api::services::Services;
use notes_api::{create_router, AppState, Config};

pub const TEST_SECRET: &str = "test-secret";

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::validation(MSG_EMAIL_TAKEN));
        }

        let user = User::new(Uuid::now_v7(), name, email, password_hash);
        users.push(user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct InMemoryNotes {
    notes: Mutex<Vec<Note>>,
    broken: bool,
}

impl InMemoryNotes {
    /// A store whose every call fails.
    pub fn broken() -> Self {
        Self {
            notes: Mutex::default(),
            broken: true,
        }
    }

    pub fn all(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNotes {
    async fn create(&self, note: NewNote) -> AppResult<Note> {
        if self.broken {
            return Err(AppError::internal("store offline"));
        }

        let note = note.into_note(Uuid::now_v7());
        self.notes.lock().unwrap().push(note.clone());
        Ok(note)
    }

    async fn list(&self) -> AppResult<Vec<Note>> {
        if self.broken {
            return Err(AppError::internal("store offline"));
        }

        Ok(self.all())
    }
}

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUsers>,
    pub notes: Arc<InMemoryNotes>,
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "SECRET" => Some(TEST_SECRET.to_string()),
        "DATABASE_URL" => Some("postgres://unused/notes".to_string()),
        // Lowest bcrypt cost; keeps the suite fast.
        "HASH_COST" => Some("4".to_string()),
        _ => None,
    })
    .expect("test config")
}

pub fn test_app() -> TestApp {
    test_app_with_notes(InMemoryNotes::default())
}

pub fn test_app_with_notes(notes: InMemoryNotes) -> TestApp {
    let users = Arc::new(InMemoryUsers::default());
    let notes = Arc::new(notes);

    let services = Services::from_repositories(users.clone(), notes.clone(), &test_config());
    let router = create_router(AppState::from_container(&services));

    TestApp {
        router,
        users,
        notes,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, body)
    }

    /// Register then log in, returning the token.
    pub async fn register_and_login(&self, name: &str, email: &str, password: &str) -> String {
        let (status, _) = self
            .send(post_json(
                "/auth/register",
                serde_json::json!({
                    "name": name,
                    "email": email,
                    "password": password,
                    "confirmPassword": password,
                }),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self
            .send(post_json(
                "/auth/login",
                serde_json::json!({ "email": email, "password": password }),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::OK);

        body["token"].as_str().unwrap().to_string()
    }
}

pub fn post_json(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// POST with a raw body and an optional content type.
pub fn post_raw(
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
    token: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);

    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::from(body)).unwrap()
}

pub fn get(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);

    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }

    builder.body(Body::empty()).unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
