//! Domain entities representing core business objects.

pub mod account;
pub mod activation_code;

// Re-export commonly used types
pub use account::Account;
pub use activation_code::{ActivationCode, CODE_LENGTH, DEFAULT_EXPIRATION_SECONDS};
