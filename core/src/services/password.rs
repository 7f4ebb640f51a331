//! Password hashing with bcrypt.
//!
//! Each hash carries its own random salt, so two hashes of the same
//! plaintext differ. Verification never errors towards the caller: a
//! malformed stored hash simply fails to verify.

use crate::errors::{DomainError, DomainResult};

/// One-way password hasher backed by bcrypt
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    /// Create a hasher with the default bcrypt cost
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hasher with a custom cost factor.
    ///
    /// Lower costs are only appropriate in tests.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password with a per-call random salt
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// Returns `false` for a mismatch and for a malformed hash; the
    /// distinction is not surfaced.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        bcrypt::verify(plaintext, hash).unwrap_or(false)
    }
}
