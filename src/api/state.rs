//! Application state - Dependency injection container.
//!
//! Provides handlers and middleware with access to the services.

use std::sync::Arc;

use crate::services::{AuthService, NoteService, ServiceContainer, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Note service
    pub note_service: Arc<dyn NoteService>,
}

impl AppState {
    /// Create application state from a service container.
    pub fn from_container<C: ServiceContainer + ?Sized>(container: &C) -> Self {
        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            note_service: container.notes(),
        }
    }
}
