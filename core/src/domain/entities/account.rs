//! Account entity representing a registered user account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account, created inactive and activated exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Email address, unique across all accounts (stored exactly as given,
    /// no normalization)
    pub email: String,

    /// One-way bcrypt hash of the password, salt embedded
    pub password_hash: String,

    /// Whether the account has been activated. Starts `false` and only
    /// ever transitions to `true`.
    pub is_active: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new inactive account
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            is_active: false,
            created_at: Utc::now(),
        }
    }

    /// Marks the account as active. Idempotent; there is no way back.
    pub fn activate(&mut self) {
        self.is_active = true;
    }
}
