//! User repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::config::MSG_EMAIL_TAKEN;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by email address (full record, including the hash)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user; the store assigns the identifier.
    ///
    /// A duplicate email rejected by the storage constraint surfaces as the
    /// same validation error as the pre-insert check.
    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User>;
}

/// SeaORM-backed UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(name),
            email: Set(email),
            password: Set(password_hash),
        };

        let model = active_model
            .insert(&*self.db)
            .await
            .map_err(map_insert_error)?;

        Ok(User::from(model))
    }
}

/// Map an insert failure to the error the client sees.
fn map_insert_error(error: DbErr) -> AppError {
    let sql_err = error.sql_err();
    classify_insert_error(sql_err, error)
}

/// A unique violation on insert can only come from the email index.
fn classify_insert_error(sql_err: Option<SqlErr>, error: DbErr) -> AppError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!(%detail, "Duplicate email rejected by storage");
            AppError::validation(MSG_EMAIL_TAKEN)
        }
        _ => AppError::from(error),
    }
}
