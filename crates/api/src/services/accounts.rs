use std::sync::Arc;

use filmlib_core::error::CoreError;
use filmlib_core::models::{Account, AccountInfo};
use filmlib_core::roles::Role;
use filmlib_core::validation::validate_credentials;
use filmlib_db::store::AccountStore;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::jwt::{generate_access_token, JwtConfig};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};

/// Successful login: a fresh access token plus who it was issued to.
#[derive(Debug, Serialize)]
pub struct LoginOutcome {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub account: AccountInfo,
}

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    jwt: Arc<JwtConfig>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>, jwt: JwtConfig) -> Self {
        Self {
            store,
            jwt: Arc::new(jwt),
        }
    }

    /// Create a `user` account.
    ///
    /// Uniqueness is checked before the insert, not atomically with it; a
    /// concurrent duplicate that slips through is caught by the
    /// `uq_accounts_username` index and also surfaces as a conflict.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<AccountInfo> {
        validate_credentials(username, password)?;
        self.insert(username, password, Role::User).await
    }

    /// Verify credentials and mint a new access token.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        validate_credentials(username, password)?;

        let invalid = || AppError::Core(CoreError::Unauthorized("Invalid username or password".into()));

        let account = self
            .store
            .find_by_username(username)
            .await?
            .ok_or_else(invalid)?;

        let password_valid = verify_password(password, &account.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
        if !password_valid {
            return Err(invalid());
        }

        let access_token = generate_access_token(&account.username, account.role, &self.jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

        tracing::info!(username = %account.username, role = %account.role, "Login succeeded");

        Ok(LoginOutcome {
            access_token,
            token_type: "Bearer",
            expires_in: self.jwt.access_token_expiry_mins * 60,
            account: AccountInfo::from(&account),
        })
    }

    /// Create an admin account unless the username is already taken.
    /// Returns `true` if an account was created.
    pub async fn ensure_admin(&self, username: &str, password: &str) -> AppResult<bool> {
        validate_credentials(username, password)?;
        if self.store.exists(username).await? {
            return Ok(false);
        }
        self.insert(username, password, Role::Admin).await?;
        Ok(true)
    }

    async fn insert(&self, username: &str, password: &str, role: Role) -> AppResult<AccountInfo> {
        if self.store.exists(username).await? {
            return Err(CoreError::Conflict(format!("Username '{username}' is already taken")).into());
        }

        let password_hash = hash_password(password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let account = Account {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash,
            role,
        };
        self.store.create(&account).await?;

        tracing::info!(account_id = %account.id, username = %account.username, role = %role, "Account created");

        Ok(AccountInfo::from(&account))
    }
}
