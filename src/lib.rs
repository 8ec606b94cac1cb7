//! Notes API - note storage and user authentication over HTTP.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration, constants and messages
//! - **domain**: Users, notes and password hashing
//! - **services**: Registration, login, tokens, user lookup, notes
//! - **infra**: Database connection and repositories
//! - **api**: HTTP handlers, access control and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # Usage
//!
//! ```bash
//! SECRET=change-me DATABASE_URL=postgres://localhost/notes cargo run -- --port 5000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Note, Password, User};
pub use errors::{AppError, AppResult};
