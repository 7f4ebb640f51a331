//! Business services containing domain logic and use cases.

pub mod password;
pub mod registration;

// Re-export commonly used types
pub use password::PasswordHasher;
pub use registration::{
    EmailNotifier, RegisterResult, RegistrationConfig, RegistrationService,
};
