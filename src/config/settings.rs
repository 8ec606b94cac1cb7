//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DB_HOST, DEFAULT_HASH_COST, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    ENV_DEVELOPMENT, ENV_PRODUCTION, HASH_COST_RANGE,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    secret: String,
    pub hash_cost: u32,
    pub server_host: String,
    pub server_port: u16,
    pub environment: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("secret", &"[REDACTED]")
            .field("hash_cost", &self.hash_cost)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("environment", &self.environment)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    ///
    /// # Errors
    /// Fails if `SECRET` is unset or empty, or if no database location can be
    /// built (neither `DATABASE_URL` nor the `DB_USER`/`DB_PASS`/`DB_NAME` triple).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::config("SECRET must be set"))?;

        let database_url = match lookup("DATABASE_URL").filter(|s| !s.is_empty()) {
            Some(url) => url,
            None => compose_database_url(&lookup)?,
        };

        let hash_cost = match lookup("HASH_COST").filter(|s| !s.is_empty()) {
            Some(raw) => parse_hash_cost(&raw)?,
            None => DEFAULT_HASH_COST,
        };

        Ok(Self {
            database_url,
            secret,
            hash_cost,
            server_host: lookup("HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            environment: lookup("NODE_ENV").unwrap_or_else(|| ENV_PRODUCTION.to_string()),
        })
    }

    /// Secret bytes for token signing/verification.
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    /// Whether verbose request logging is enabled.
    pub fn is_development(&self) -> bool {
        self.environment == ENV_DEVELOPMENT
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_hash_cost(raw: &str) -> AppResult<u32> {
    raw.trim()
        .parse()
        .ok()
        .filter(|cost| HASH_COST_RANGE.contains(cost))
        .ok_or_else(|| {
            AppError::config(format!(
                "HASH_COST must be between {} and {}, got {:?}",
                HASH_COST_RANGE.start(),
                HASH_COST_RANGE.end(),
                raw
            ))
        })
}

fn compose_database_url<F>(lookup: &F) -> AppResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    let require = |key: &str| {
        lookup(key).ok_or_else(|| {
            AppError::config(format!("{} must be set when DATABASE_URL is not", key))
        })
    };

    let user = require("DB_USER")?;
    let pass = require("DB_PASS")?;
    let name = require("DB_NAME")?;
    let host = lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string());

    Ok(format!("postgres://{}:{}@{}/{}", user, pass, host, name))
}
