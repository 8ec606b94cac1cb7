//! Integration tests for API endpoints.
//!
//! The full router runs against in-memory repositories, so every request
//! passes through the real extractors, access control and services.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::{bearer, get, post_json, post_raw, test_app, test_app_with_notes, InMemoryNotes, TEST_SECRET};
use notes_api::config::*;
use notes_api::domain::Password;
use notes_api::services::TokenIssuer;

// =============================================================================
// Root & docs
// =============================================================================

#[tokio::test]
async fn test_root_returns_welcome() {
    let app = test_app();

    let (status, body) = app.send(get("/", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "msg": MSG_WELCOME }));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app();

    let (status, body) = app.send(get("/api-docs/openapi.json", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/auth/register"].is_object());
    assert!(body["paths"]["/notes"].is_object());
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_reports_first_missing_field() {
    let app = test_app();

    let cases = [
        (json!({}), MSG_NAME_REQUIRED),
        (json!({ "email": "a@x.com", "password": "p1" }), MSG_NAME_REQUIRED),
        (json!({ "name": "Ana", "password": "p1" }), MSG_EMAIL_REQUIRED),
        (json!({ "name": "Ana", "email": "a@x.com" }), MSG_PASSWORD_REQUIRED),
        (
            json!({ "name": "", "email": "a@x.com", "password": "p1", "confirmPassword": "p1" }),
            MSG_NAME_REQUIRED,
        ),
        (
            json!({ "name": "Ana", "email": "a@x.com", "password": "p1", "confirmPassword": "p2" }),
            MSG_PASSWORD_MISMATCH,
        ),
        (
            json!({ "name": "Ana", "email": "a@x.com", "password": "p1" }),
            MSG_PASSWORD_MISMATCH,
        ),
    ];

    for (payload, expected) in cases {
        let (status, body) = app.send(post_json("/auth/register", payload, None)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["msg"], expected);
    }

    assert!(app.users.all().is_empty());
}

#[tokio::test]
async fn test_register_stores_hashed_password() {
    let app = test_app();

    let (status, body) = app
        .send(post_json(
            "/auth/register",
            json!({ "name": "Ana", "email": "a@x.com", "password": "p1", "confirmPassword": "p1" }),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "msg": MSG_USER_CREATED }));

    let users = app.users.all();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ana");
    assert_ne!(users[0].password_hash, "p1");
    assert!(Password::from_hash(users[0].password_hash.clone()).verify("p1"));
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let app = test_app();
    let payload =
        json!({ "name": "Ana", "email": "a@x.com", "password": "p1", "confirmPassword": "p1" });

    let (first, _) = app.send(post_json("/auth/register", payload.clone(), None)).await;
    let (second, body) = app.send(post_json("/auth/register", payload, None)).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["msg"], MSG_EMAIL_TAKEN);
    assert_eq!(app.users.all().len(), 1);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = test_app();

    for body in ["{ not json", r#"{"name": 5}"#] {
        let (status, response) = app
            .send(post_raw("/auth/register", Some("application/json"), body, None))
            .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response, json!({ "msg": MSG_INVALID_BODY }));
    }

    assert!(app.users.all().is_empty());
}

#[tokio::test]
async fn test_empty_body_reports_first_missing_field() {
    let app = test_app();

    for content_type in [Some("application/json"), Some("text/plain"), None] {
        let (status, body) = app
            .send(post_raw("/auth/register", content_type, "", None))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, json!({ "msg": MSG_NAME_REQUIRED }));

        let (status, body) = app
            .send(post_raw("/auth/login", content_type, "", None))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, json!({ "msg": MSG_EMAIL_REQUIRED }));
    }

    assert!(app.users.all().is_empty());
}

#[tokio::test]
async fn test_untyped_json_body_is_ignored() {
    let app = test_app();

    let (status, body) = app
        .send(post_raw(
            "/auth/register",
            None,
            r#"{"name":"Ana","email":"a@x.com","password":"p1","confirmPassword":"p1"}"#,
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["msg"], MSG_NAME_REQUIRED);
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_returns_token_for_user() {
    let app = test_app();
    let token = app.register_and_login("Ana", "a@x.com", "p1").await;

    let claims = TokenIssuer::new(TEST_SECRET.as_bytes()).verify(&token).unwrap();
    assert_eq!(claims.id, app.users.all()[0].id);
}

#[tokio::test]
async fn test_login_success_message() {
    let app = test_app();
    app.register_and_login("Ana", "a@x.com", "p1").await;

    let (status, body) = app
        .send(post_json("/auth/login", json!({ "email": "a@x.com", "password": "p1" }), None))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], MSG_LOGIN_SUCCESS);
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_login_failures() {
    let app = test_app();
    app.register_and_login("Ana", "a@x.com", "p1").await;

    let cases = [
        (json!({ "password": "p1" }), MSG_EMAIL_REQUIRED),
        (json!({ "email": "a@x.com" }), MSG_PASSWORD_REQUIRED),
        (json!({ "email": "nobody@x.com", "password": "p1" }), MSG_LOGIN_UNKNOWN_USER),
        (json!({ "email": "a@x.com", "password": "p2" }), MSG_LOGIN_WRONG_PASSWORD),
    ];

    for (payload, expected) in cases {
        let (status, body) = app.send(post_json("/auth/login", payload, None)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["msg"], expected);
        assert!(body.get("token").is_none());
    }
}

// =============================================================================
// Access control
// =============================================================================

#[tokio::test]
async fn test_protected_routes_without_token() {
    let app = test_app();
    let user_path = format!("/user/{}", Uuid::now_v7());

    for request in [
        get("/notes", None),
        get(&user_path, None),
        post_json("/notes/save", json!({ "title": "T" }), None),
    ] {
        let (status, body) = app.send(request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "msg": MSG_ACCESS_DENIED }));
    }

    assert!(app.notes.all().is_empty());
}

#[tokio::test]
async fn test_protected_routes_with_invalid_token() {
    let app = test_app();
    let foreign = TokenIssuer::new(b"another-secret").issue(Uuid::now_v7()).unwrap();

    for header in ["Bearer garbage".to_string(), bearer(&foreign)] {
        let (status, body) = app.send(get("/notes", Some(header.as_str()))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "msg": MSG_INVALID_TOKEN }));
    }

    let (status, _) = app
        .send(post_json("/notes/save", json!({ "title": "T" }), Some("garbage")))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(app.notes.all().is_empty());
}

#[tokio::test]
async fn test_header_without_token_is_unauthorized() {
    let app = test_app();

    let (status, _) = app.send(get("/notes", Some("Bearer"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Notes
// =============================================================================

#[tokio::test]
async fn test_save_note_requires_title() {
    let app = test_app();
    let token = app.register_and_login("Ana", "a@x.com", "p1").await;

    for payload in [json!({}), json!({ "title": "", "description": "d" })] {
        let (status, body) = app.send(post_json("/notes/save", payload, Some(token.as_str()))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["msg"], MSG_NOTE_TITLE_REQUIRED);
    }

    assert!(app.notes.all().is_empty());
}

#[tokio::test]
async fn test_save_note_with_empty_body() {
    let app = test_app();
    let token = app.register_and_login("Ana", "a@x.com", "p1").await;

    for content_type in [Some("application/json"), None] {
        let (status, body) = app
            .send(post_raw("/notes/save", content_type, "", Some(token.as_str())))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, json!({ "msg": MSG_NOTE_TITLE_REQUIRED }));
    }

    assert!(app.notes.all().is_empty());
}

#[tokio::test]
async fn test_saved_notes_are_listed_in_order() {
    let app = test_app();
    let token = app.register_and_login("Ana", "a@x.com", "p1").await;

    let (status, body) = app
        .send(post_json(
            "/notes/save",
            json!({ "title": "T", "description": "d", "created": "2024-01-01", "modified": "2024-01-02" }),
            Some(token.as_str()),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "msg": MSG_NOTE_SAVED }));

    let (status, _) = app
        .send(post_json("/notes/save", json!({ "title": "Second" }), Some(token.as_str())))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.send(get("/notes", Some(bearer(&token).as_str()))).await;
    assert_eq!(status, StatusCode::OK);

    let notes = body["listOfNotes"].as_array().unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0]["title"], "T");
    assert_eq!(notes[0]["description"], "d");
    assert_eq!(notes[0]["created"], "2024-01-01");
    assert_eq!(notes[0]["modified"], "2024-01-02");
    assert!(notes[0]["id"].is_string());
    assert_eq!(notes[1]["title"], "Second");
    assert!(notes[1].get("description").is_none());
}

#[tokio::test]
async fn test_empty_note_list() {
    let app = test_app();
    let token = app.register_and_login("Ana", "a@x.com", "p1").await;

    let (status, body) = app.send(get("/notes", Some(bearer(&token).as_str()))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "listOfNotes": [] }));
}

#[tokio::test]
async fn test_note_store_failures() {
    let app = test_app_with_notes(InMemoryNotes::broken());
    let token = app.register_and_login("Ana", "a@x.com", "p1").await;

    let (status, body) = app.send(get("/notes", Some(bearer(&token).as_str()))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "msg": MSG_SERVER_UNAVAILABLE }));

    let (status, body) = app
        .send(post_json("/notes/save", json!({ "title": "T" }), Some(token.as_str())))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "msg": MSG_INTERNAL_ERROR }));
}

// =============================================================================
// User lookup
// =============================================================================

#[tokio::test]
async fn test_get_user_hides_password() {
    let app = test_app();
    let token = app.register_and_login("Ana", "a@x.com", "p1").await;
    let user_id = app.users.all()[0].id;

    let (status, body) = app
        .send(get(&format!("/user/{}", user_id), Some(bearer(&token).as_str())))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "user": { "id": user_id.to_string(), "name": "Ana", "email": "a@x.com" } })
    );
}

#[tokio::test]
async fn test_get_user_not_found() {
    let app = test_app();
    let token = app.register_and_login("Ana", "a@x.com", "p1").await;

    for path in [format!("/user/{}", Uuid::now_v7()), "/user/not-a-uuid".to_string()] {
        let (status, body) = app.send(get(&path, Some(bearer(&token).as_str()))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "msg": MSG_USER_NOT_FOUND }));
    }
}
