//! API middleware.

mod auth;
mod trace;

pub use auth::{auth_middleware, bearer_token, check_access, Access};
pub use trace::request_tracing;
