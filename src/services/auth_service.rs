//! Authentication service - Registration, login and token checks.
//!
//! Field presence is validated by the handlers' extractors; this service
//! owns the checks that need storage or credentials.

use async_trait::async_trait;
use std::sync::Arc;

use super::token::{Claims, TokenIssuer};
use crate::config::{MSG_EMAIL_TAKEN, MSG_LOGIN_UNKNOWN_USER, MSG_LOGIN_WRONG_PASSWORD};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Check credentials and return a signed token
    async fn login(&self, email: String, password: String) -> AppResult<String>;

    /// Verify a token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    tokens: TokenIssuer,
    hash_cost: u32,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenIssuer, hash_cost: u32) -> Self {
        Self {
            users,
            tokens,
            hash_cost,
        }
    }
}

/// bcrypt is CPU-bound; keep it off the async workers.
async fn hash_password(plain_text: String, cost: u32) -> AppResult<Password> {
    tokio::task::spawn_blocking(move || Password::with_cost(&plain_text, cost))
        .await
        .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
}

async fn verify_password(plain_text: String, hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || Password::from_hash(hash).verify(&plain_text))
        .await
        .map_err(|e| AppError::internal(format!("Verification task failed: {}", e)))
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User> {
        // Best-effort check; the unique index on email catches concurrent inserts.
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::validation(MSG_EMAIL_TAKEN));
        }

        let password_hash = hash_password(password, self.hash_cost).await?.into_string();
        let user = self.users.create(name, email, password_hash).await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<String> {
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::validation(MSG_LOGIN_UNKNOWN_USER))?;

        if !verify_password(password, user.password_hash.clone()).await? {
            return Err(AppError::validation(MSG_LOGIN_WRONG_PASSWORD));
        }

        self.tokens.issue(user.id)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.tokens.verify(token)
    }
}
