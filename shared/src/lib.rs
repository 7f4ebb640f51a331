//! Shared utilities and common types for the registration server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Utility functions (email redaction, etc.)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, EmailConfig};
pub use utils::email::redact_email;
