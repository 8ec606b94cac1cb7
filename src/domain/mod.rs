//! Domain layer - Core business entities
//!
//! Models the two persisted records (users and notes) and the credential
//! hashing value object, independent of storage and transport.

pub mod note;
pub mod password;
pub mod user;

pub use note::{NewNote, Note};
pub use password::Password;
pub use user::{User, UserResponse};
