//! Account repository trait defining the interface for durable account state.
//!
//! The trait is async-first and returns explicit error kinds from the
//! domain taxonomy; implementations map backend failures (e.g. a unique
//! constraint violation) onto those kinds instead of letting backend
//! exception types cross the boundary.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::activation_code::ActivationCode;
use crate::errors::DomainError;

/// Repository trait for account and activation-code persistence
///
/// Implementations must provide the transactional guarantees documented on
/// each operation; the registration service relies on them for its
/// invariants (email uniqueness, atomic account+code creation, idempotent
/// activation).
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account together with its first activation code as one
    /// atomic unit: either both rows exist afterwards or neither does.
    ///
    /// # Returns
    /// * `Ok(())` - Both rows committed
    /// * `Err(DomainError::Conflict)` - An account with this email already
    ///   exists; nothing was persisted
    /// * `Err(DomainError::Store)` - Any other persistence failure; nothing
    ///   was persisted
    async fn create_with_code(
        &self,
        account: &Account,
        code: &ActivationCode,
    ) -> Result<(), DomainError>;

    /// Find an account by its email address (exact match, as stored)
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with this email
    /// * `Err(DomainError::Store)` - Persistence failure
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find the most recently stored activation code for an account.
    ///
    /// Multiple code rows per account are possible; "latest" is defined by
    /// insertion order.
    async fn find_latest_code(
        &self,
        account_id: Uuid,
    ) -> Result<Option<ActivationCode>, DomainError>;

    /// Mark an account as active.
    ///
    /// Idempotent: marking an already-active account succeeds and changes
    /// nothing. An unknown `account_id` is also a no-op success; callers
    /// are expected to have resolved the id through `find_by_email` first.
    async fn mark_active(&self, account_id: Uuid) -> Result<(), DomainError>;
}
