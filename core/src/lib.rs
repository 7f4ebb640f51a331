//! # Registration Core
//!
//! Core business logic and domain layer for the registration backend.
//! This crate contains domain entities, the registration/activation service,
//! repository interfaces, and error types. The HTTP layer and process
//! bootstrap live outside this crate and call into it with already
//! shape-validated input.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Account, ActivationCode};
pub use errors::{DomainError, DomainResult};
pub use repositories::{AccountRepository, MockAccountRepository};
pub use services::{
    EmailNotifier, PasswordHasher, RegisterResult, RegistrationConfig, RegistrationService,
};
