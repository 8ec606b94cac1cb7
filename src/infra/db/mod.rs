//! Database connection and schema bootstrap.

use std::sync::Arc;

use sea_orm::{ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Schema};

use super::repositories::entities::{NoteEntity, UserEntity};
use crate::config::Config;

/// Database wrapper for connection management.
///
/// Constructed once at startup; every store shares the same pool.
pub struct Database {
    connection: Arc<DatabaseConnection>,
}

impl Database {
    /// Open the connection pool.
    ///
    /// # Errors
    /// Fails if the database is unreachable; callers must not start
    /// serving requests in that case.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        tracing::info!("Connected to database");
        Ok(Self::from_connection(connection))
    }

    /// Wrap an existing connection.
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self {
            connection: Arc::new(connection),
        }
    }

    /// Create the `users` and `notes` tables if they are missing.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        let schema = Schema::new(backend);

        let statements = [
            schema
                .create_table_from_entity(UserEntity)
                .if_not_exists()
                .to_owned(),
            schema
                .create_table_from_entity(NoteEntity)
                .if_not_exists()
                .to_owned(),
        ];

        for statement in &statements {
            self.connection.execute(backend.build(statement)).await?;
        }

        tracing::debug!("Schema ready");
        Ok(())
    }

    /// Shared handle to the connection pool.
    pub fn get_connection(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.connection)
    }
}
