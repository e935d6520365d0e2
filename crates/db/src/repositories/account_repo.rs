//! Repository for the `accounts` table.

use async_trait::async_trait;
use filmlib_core::models::Account;
use sqlx::PgPool;

use crate::models::account::AccountRow;
use crate::store::AccountStore;

/// Provides the account operations needed for registration and login.
#[derive(Clone)]
pub struct AccountRepo {
    pool: PgPool,
}

impl AccountRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for AccountRepo {
    async fn exists(&self, username: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM accounts WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
    }

    /// Insert a new account. A concurrent registration of the same username
    /// that slips past the existence check fails here on `uq_accounts_username`.
    async fn create(&self, account: &Account) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO accounts (id, username, password_hash, role) VALUES ($1, $2, $3, $4)",
        )
        .bind(account.id)
        .bind(&account.username)
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Find an account by username (case-sensitive).
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, sqlx::Error> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, username, password_hash, role FROM accounts WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Account::from))
    }
}
