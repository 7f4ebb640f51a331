//! Configuration types for the registration server.

pub mod database;
pub mod email;

pub use database::DatabaseConfig;
pub use email::EmailConfig;

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Database configuration
    pub database: DatabaseConfig,
    /// Email notifier configuration
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first if one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database: DatabaseConfig::from_env(),
            email: EmailConfig::from_env(),
        }
    }
}
