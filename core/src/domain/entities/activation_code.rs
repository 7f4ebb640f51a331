//! Activation code entity for email-based account activation.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the activation code
pub const CODE_LENGTH: usize = 4;

/// Default lifetime of an activation code (1 minute)
pub const DEFAULT_EXPIRATION_SECONDS: i64 = 60;

/// A short-lived numeric code gating account activation.
///
/// The code is a zero-padded 4-digit string in the range "0000"–"9999",
/// drawn uniformly. It proves control of the registered email channel; it
/// is not a security token, so statistically uniform pseudo-randomness is
/// sufficient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationCode {
    /// The account this code belongs to
    pub account_id: Uuid,

    /// The 4-digit activation code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl ActivationCode {
    /// Creates a new activation code with the default 60-second lifetime
    pub fn new(account_id: Uuid) -> Self {
        Self::new_with_expiration(account_id, DEFAULT_EXPIRATION_SECONDS)
    }

    /// Creates a new activation code with a custom lifetime in seconds
    pub fn new_with_expiration(account_id: Uuid, expiration_seconds: i64) -> Self {
        let now = Utc::now();

        Self {
            account_id,
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + Duration::seconds(expiration_seconds),
        }
    }

    /// Generates a uniformly random zero-padded 4-digit code
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u16 = rng.gen_range(0..10_000);
        format!("{:04}", code)
    }

    /// Checks whether the code has expired.
    ///
    /// Expiry is strict: a code whose `expires_at` equals the current
    /// instant is already expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Checks whether a submitted code matches this one (exact string match)
    pub fn matches(&self, input_code: &str) -> bool {
        self.code == input_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_activation_code() {
        let account_id = Uuid::new_v4();
        let code = ActivationCode::new(account_id);

        assert_eq!(code.account_id, account_id);
        assert_eq!(code.code.len(), CODE_LENGTH);
        assert_eq!(
            code.expires_at,
            code.created_at + Duration::seconds(DEFAULT_EXPIRATION_SECONDS)
        );
        assert!(!code.is_expired());
    }

    #[test]
    fn test_generate_code_format() {
        for _ in 0..200 {
            let code = ActivationCode::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            let num: u16 = code.parse().expect("code should parse as a number");
            assert!(num < 10_000);
        }
    }

    #[test]
    fn test_codes_are_not_constant() {
        let codes: Vec<String> = (0..100)
            .map(|_| ActivationCode::generate_code())
            .collect();

        let unique = codes.iter().collect::<std::collections::HashSet<_>>().len();
        assert!(unique > 1);
    }

    #[test]
    fn test_matches_exact_string() {
        let code = ActivationCode::new(Uuid::new_v4());

        assert!(code.matches(&code.code));
        assert!(!code.matches("not-a-code"));
        // Leading zeros matter: "0042" != "42"
        let trimmed = code.code.trim_start_matches('0');
        if trimmed.len() != CODE_LENGTH {
            assert!(!code.matches(trimmed));
        }
    }

    #[test]
    fn test_zero_lifetime_is_immediately_expired() {
        let code = ActivationCode::new_with_expiration(Uuid::new_v4(), 0);
        assert!(code.is_expired());
    }

    #[test]
    fn test_custom_expiration() {
        let code = ActivationCode::new_with_expiration(Uuid::new_v4(), 300);
        assert_eq!(code.expires_at, code.created_at + Duration::seconds(300));
        assert!(!code.is_expired());
    }

    #[test]
    fn test_serialization_round_trip() {
        let code = ActivationCode::new(Uuid::new_v4());
        let json = serde_json::to_string(&code).unwrap();
        let deserialized: ActivationCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, deserialized);
    }
}
