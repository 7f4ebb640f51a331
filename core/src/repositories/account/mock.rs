//! In-memory implementation of AccountRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::activation_code::ActivationCode;
use crate::errors::DomainError;

use super::trait_::AccountRepository;

#[derive(Default)]
struct MockState {
    accounts: HashMap<Uuid, Account>,
    // Codes in insertion order; "latest" is the last matching entry
    codes: Vec<ActivationCode>,
}

/// In-memory account repository.
///
/// Mirrors the store contract including the conflict check, so service
/// tests exercise the same outcomes as the MySQL implementation.
#[derive(Clone, Default)]
pub struct MockAccountRepository {
    state: Arc<RwLock<MockState>>,
}

impl MockAccountRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts (test support)
    pub async fn account_count(&self) -> usize {
        self.state.read().await.accounts.len()
    }

    /// Number of stored activation codes (test support)
    pub async fn code_count(&self) -> usize {
        self.state.read().await.codes.len()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn create_with_code(
        &self,
        account: &Account,
        code: &ActivationCode,
    ) -> Result<(), DomainError> {
        let mut state = self.state.write().await;

        if state.accounts.values().any(|a| a.email == account.email) {
            return Err(DomainError::Conflict);
        }

        state.accounts.insert(account.id, account.clone());
        state.codes.push(code.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let state = self.state.read().await;
        Ok(state.accounts.values().find(|a| a.email == email).cloned())
    }

    async fn find_latest_code(
        &self,
        account_id: Uuid,
    ) -> Result<Option<ActivationCode>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .codes
            .iter()
            .rev()
            .find(|c| c.account_id == account_id)
            .cloned())
    }

    async fn mark_active(&self, account_id: Uuid) -> Result<(), DomainError> {
        let mut state = self.state.write().await;

        // Unknown id is a no-op, matching an UPDATE that affects zero rows
        if let Some(account) = state.accounts.get_mut(&account_id) {
            account.activate();
        }
        Ok(())
    }
}
