//! Configuration for the registration service

use crate::domain::entities::activation_code::DEFAULT_EXPIRATION_SECONDS;

/// Configuration for the registration service
#[derive(Debug, Clone)]
pub struct RegistrationConfig {
    /// Number of seconds before an activation code expires
    pub code_ttl_seconds: i64,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: DEFAULT_EXPIRATION_SECONDS,
        }
    }
}
