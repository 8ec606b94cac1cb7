//! Service Container - Centralized service construction and access.
//!
//! Wires the stores, the token issuer and the services together from a
//! single database connection.

use std::sync::Arc;

use super::{AuthService, Authenticator, NoteManager, NoteService, TokenIssuer, UserManager, UserService};
use crate::config::Config;
use crate::infra::{Database, NoteRepository, NoteStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get note service
    fn notes(&self) -> Arc<dyn NoteService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    note_service: Arc<dyn NoteService>,
}

impl Services {
    /// Build every service over the given repositories.
    pub fn from_repositories(
        users: Arc<dyn UserRepository>,
        notes: Arc<dyn NoteRepository>,
        config: &Config,
    ) -> Self {
        let tokens = TokenIssuer::new(config.secret_bytes());

        Self {
            auth_service: Arc::new(Authenticator::new(users.clone(), tokens, config.hash_cost)),
            user_service: Arc::new(UserManager::new(users)),
            note_service: Arc::new(NoteManager::new(notes)),
        }
    }

    /// Build every service over SeaORM stores sharing one connection.
    pub fn from_database(database: &Database, config: &Config) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(database.get_connection()));
        let notes: Arc<dyn NoteRepository> = Arc::new(NoteStore::new(database.get_connection()));
        Self::from_repositories(users, notes, config)
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn notes(&self) -> Arc<dyn NoteService> {
        self.note_service.clone()
    }
}
