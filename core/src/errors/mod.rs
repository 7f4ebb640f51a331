//! Domain-specific error types and error handling.
//!
//! The store contract returns explicit outcome kinds rather than leaking
//! backend exceptions: a duplicate email surfaces as `Conflict`, any other
//! persistence failure as `Store`. Credential and code failures are
//! deliberately collapsed into a single `InvalidCredentialsOrCode` kind so
//! the caller cannot distinguish an unknown email from a wrong password,
//! a wrong code, or an expired code.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// An account with the same email already exists
    #[error("Account already exists")]
    Conflict,

    /// Unknown email, wrong password, wrong code, or expired code.
    /// Which one it was is visible only in internal diagnostics.
    #[error("Invalid credentials or activation code")]
    InvalidCredentialsOrCode,

    /// The backing store failed; fatal to the request, never retried here
    #[error("Store error: {message}")]
    Store { message: String },

    /// Unexpected internal failure (e.g. the password hasher)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_credential_failure_message() {
        // The message never names the failing check
        let err = DomainError::InvalidCredentialsOrCode;
        let message = err.to_string();
        assert!(!message.contains("email"));
        assert!(!message.contains("password"));
        assert!(!message.contains("expired"));
    }

    #[test]
    fn test_store_error_carries_message() {
        let err = DomainError::Store {
            message: "connection reset".to_string(),
        };
        assert!(err.to_string().contains("connection reset"));
    }
}
