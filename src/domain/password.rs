//! Password value object - credential hashing.
//!
//! Wraps bcrypt so the rest of the crate only ever sees a stored hash.

use crate::errors::{AppError, AppResult};

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password with an explicit bcrypt cost.
    ///
    /// # Errors
    /// Returns an internal error if bcrypt rejects the cost or cannot
    /// produce a salt.
    pub fn with_cost(plain_text: &str, cost: u32) -> AppResult<Self> {
        let hash = bcrypt::hash(plain_text, cost)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A malformed stored hash counts as a mismatch.
    pub fn verify(&self, plain_text: &str) -> bool {
        bcrypt::verify(plain_text, &self.hash).unwrap_or(false)
    }
}
