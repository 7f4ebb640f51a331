//! Registration and activation service.
//!
//! Orchestrates the password hasher, code generation, account store, and
//! email notifier into the two core operations: `register` and `activate`.

pub mod config;
pub mod service;
pub mod traits;
pub mod types;

pub use config::RegistrationConfig;
pub use service::RegistrationService;
pub use traits::EmailNotifier;
pub use types::RegisterResult;
