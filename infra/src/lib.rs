//! # Infrastructure Layer
//!
//! Concrete implementations behind the core's abstraction boundaries:
//!
//! - **Database**: MySQL account store using SQLx
//! - **Email**: HTTP notifier for activation codes, plus a mock for
//!   development and tests

pub mod database;
pub mod email;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Database migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP client construction or request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
