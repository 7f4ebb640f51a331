//! Main registration/activation service implementation

use std::sync::Arc;

use reg_shared::utils::email::redact_email;

use crate::domain::entities::account::Account;
use crate::domain::entities::activation_code::ActivationCode;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::password::PasswordHasher;

use super::config::RegistrationConfig;
use super::traits::EmailNotifier;
use super::types::RegisterResult;

/// Service for registering accounts and activating them with a code.
///
/// An account moves through `Pending` (inactive, unexpired code) and
/// possibly `Expired` (inactive, code past its lifetime) to `Active`,
/// which is terminal: once active, every further activation attempt
/// succeeds trivially.
pub struct RegistrationService<R, N>
where
    R: AccountRepository,
    N: EmailNotifier,
{
    /// Account repository for durable state
    repository: Arc<R>,
    /// Best-effort delivery channel for activation codes
    notifier: Arc<N>,
    /// Password hashing
    hasher: PasswordHasher,
    /// Service configuration
    config: RegistrationConfig,
}

impl<R, N> RegistrationService<R, N>
where
    R: AccountRepository,
    N: EmailNotifier,
{
    /// Create a new registration service
    pub fn new(repository: Arc<R>, notifier: Arc<N>, config: RegistrationConfig) -> Self {
        Self {
            repository,
            notifier,
            hasher: PasswordHasher::new(),
            config,
        }
    }

    /// Create a new registration service with a custom hasher.
    ///
    /// Tests use this to lower the bcrypt cost.
    pub fn with_hasher(
        repository: Arc<R>,
        notifier: Arc<N>,
        hasher: PasswordHasher,
        config: RegistrationConfig,
    ) -> Self {
        Self {
            repository,
            notifier,
            hasher,
            config,
        }
    }

    /// Register a new account.
    ///
    /// This method:
    /// 1. Hashes the password (salted, one-way)
    /// 2. Generates a 4-digit activation code valid for the configured TTL
    /// 3. Persists the account and code as one atomic unit
    /// 4. Sends the code through the notifier, best-effort, after commit
    ///
    /// A duplicate email fails with `DomainError::Conflict` and persists
    /// nothing. Notifier failure never fails the registration: the code is
    /// surfaced through a warn-level log line instead and the result only
    /// records the delivery outcome as a diagnostic.
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<RegisterResult> {
        let password_hash = self.hasher.hash(password)?;

        let account = Account::new(email.to_string(), password_hash);
        let code = ActivationCode::new_with_expiration(account.id, self.config.code_ttl_seconds);

        // Single transaction: account row + code row, or neither (on
        // conflict the repository rolls back and nothing is persisted)
        self.repository.create_with_code(&account, &code).await?;

        tracing::info!(
            email = %redact_email(email),
            account_id = %account.id,
            event = "account_registered",
            "Account created, activation pending"
        );

        // The transaction is already committed; from here on, nothing can
        // roll the registration back
        let notification_sent = self.notifier.send_activation_code(email, &code.code).await;

        if !notification_sent {
            // Fallback channel: operations can read the code from the logs
            tracing::warn!(
                email = %redact_email(email),
                account_id = %account.id,
                code = %code.code,
                event = "activation_email_failed",
                "Email delivery failed; activation code surfaced in log as fallback"
            );
        }

        Ok(RegisterResult {
            account_id: account.id,
            notification_sent,
        })
    }

    /// Activate an account with its credentials and activation code.
    ///
    /// Check order matters: an already-active account short-circuits to
    /// success before the password is re-verified (idempotent activation).
    /// Every failure mode maps to the same `InvalidCredentialsOrCode` kind;
    /// the actual cause is only visible in the log events below.
    pub async fn activate(&self, email: &str, password: &str, code: &str) -> DomainResult<()> {
        let account = match self.repository.find_by_email(email).await? {
            Some(account) => account,
            None => {
                tracing::warn!(
                    email = %redact_email(email),
                    event = "activation_rejected",
                    reason = "unknown_email",
                    "Activation attempt for unknown email"
                );
                return Err(DomainError::InvalidCredentialsOrCode);
            }
        };

        if account.is_active {
            tracing::info!(
                email = %redact_email(email),
                account_id = %account.id,
                event = "activation_noop",
                "Account already active"
            );
            return Ok(());
        }

        if !self.hasher.verify(password, &account.password_hash) {
            tracing::warn!(
                email = %redact_email(email),
                account_id = %account.id,
                event = "activation_rejected",
                reason = "password_mismatch",
                "Activation attempt with wrong password"
            );
            return Err(DomainError::InvalidCredentialsOrCode);
        }

        let stored = match self.repository.find_latest_code(account.id).await? {
            Some(stored) => stored,
            None => {
                // Should not happen in the normal flow; treated the same
                // as any other credential failure towards the caller
                tracing::error!(
                    email = %redact_email(email),
                    account_id = %account.id,
                    event = "activation_rejected",
                    reason = "code_missing",
                    "No activation code stored for pending account"
                );
                return Err(DomainError::InvalidCredentialsOrCode);
            }
        };

        if !stored.matches(code) {
            tracing::warn!(
                email = %redact_email(email),
                account_id = %account.id,
                event = "activation_rejected",
                reason = "code_mismatch",
                "Activation attempt with wrong code"
            );
            return Err(DomainError::InvalidCredentialsOrCode);
        }

        if stored.is_expired() {
            tracing::warn!(
                email = %redact_email(email),
                account_id = %account.id,
                event = "activation_rejected",
                reason = "code_expired",
                expired_at = %stored.expires_at,
                "Activation attempt with expired code"
            );
            return Err(DomainError::InvalidCredentialsOrCode);
        }

        self.repository.mark_active(account.id).await?;

        tracing::info!(
            email = %redact_email(email),
            account_id = %account.id,
            event = "account_activated",
            "Account activated"
        );

        Ok(())
    }
}
