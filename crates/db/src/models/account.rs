//! Account rows.

use filmlib_core::models::Account;
use filmlib_core::roles::Role;
use filmlib_core::types::EntityId;
use sqlx::FromRow;

/// Row from the `accounts` table. `role` is kept as raw text here and
/// narrowed to [`Role`] on conversion.
#[derive(Debug, Clone, FromRow)]
pub struct AccountRow {
    pub id: EntityId,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            role: Role::from(row.role),
        }
    }
}
