//! MySQL implementation of the AccountRepository trait.
//!
//! Account creation inserts the account row and its activation code row in
//! one transaction; a unique-constraint violation on the email maps to
//! `DomainError::Conflict` and rolls the whole pair back. Every other
//! database failure maps to `DomainError::Store`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use reg_core::domain::entities::account::Account;
use reg_core::domain::entities::activation_code::ActivationCode;
use reg_core::errors::DomainError;
use reg_core::repositories::AccountRepository;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Map an SQLx error onto the domain taxonomy
    fn map_db_error(e: sqlx::Error) -> DomainError {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::Conflict,
            _ => DomainError::Store {
                message: format!("Database operation failed: {}", e),
            },
        }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Store {
                message: format!("Failed to get id: {}", e),
            })?;

        Ok(Account {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Store {
                message: format!("Invalid UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Store {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Store {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            is_active: row.try_get("is_active").map_err(|e| DomainError::Store {
                message: format!("Failed to get is_active: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Store {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn create_with_code(
        &self,
        account: &Account,
        code: &ActivationCode,
    ) -> Result<(), DomainError> {
        // One transaction for both rows; dropping the transaction on any
        // early return rolls it back, so a conflict persists nothing
        let mut tx = self.pool.begin().await.map_err(Self::map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, is_active, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(account.id.to_string())
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.is_active)
        .bind(account.created_at)
        .execute(&mut *tx)
        .await
        .map_err(Self::map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO activation_codes (user_id, code, expires_at, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(code.account_id.to_string())
        .bind(&code.code)
        .bind(code.expires_at)
        .bind(code.created_at)
        .execute(&mut *tx)
        .await
        .map_err(Self::map_db_error)?;

        tx.commit().await.map_err(Self::map_db_error)?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let result = sqlx::query(
            r#"
            SELECT id, email, password_hash, is_active, created_at
            FROM users
            WHERE email = ?
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::map_db_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_latest_code(
        &self,
        account_id: Uuid,
    ) -> Result<Option<ActivationCode>, DomainError> {
        // "Latest" is defined by insertion order via the auto-increment id
        let result = sqlx::query(
            r#"
            SELECT user_id, code, expires_at, created_at
            FROM activation_codes
            WHERE user_id = ?
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .bind(account_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::map_db_error)?;

        let Some(row) = result else {
            return Ok(None);
        };

        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Store {
            message: format!("Failed to get user_id: {}", e),
        })?;

        Ok(Some(ActivationCode {
            account_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Store {
                message: format!("Invalid UUID: {}", e),
            })?,
            code: row.try_get("code").map_err(|e| DomainError::Store {
                message: format!("Failed to get code: {}", e),
            })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Store {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Store {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        }))
    }

    async fn mark_active(&self, account_id: Uuid) -> Result<(), DomainError> {
        // Idempotent: MySQL reports zero affected rows when the value is
        // already TRUE, which is still a success here
        sqlx::query("UPDATE users SET is_active = TRUE WHERE id = ?")
            .bind(account_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(Self::map_db_error)?;

        Ok(())
    }
}
