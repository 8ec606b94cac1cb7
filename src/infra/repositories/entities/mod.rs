//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod note;
pub mod user;

pub use note::Entity as NoteEntity;
pub use user::Entity as UserEntity;
