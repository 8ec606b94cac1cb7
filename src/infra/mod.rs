//! Infrastructure layer - External systems integration
//!
//! This module handles the database connection and the repositories
//! built on top of it.

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{NoteRepository, NoteStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockNoteRepository, MockUserRepository};
