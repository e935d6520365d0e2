//! Catalog entities shared by the storage and HTTP layers.
//!
//! Incoming create/update payloads use the same shapes as stored entities:
//! a missing JSON field deserializes to the type's zero value, which is what
//! [`crate::merge`] relies on to tell "not supplied" from "replace".

use serde::{Deserialize, Serialize};

use crate::roles::Role;
use crate::types::{Date, EntityId};

/// A performer. Referenced by works, never owned by them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Performer {
    pub id: EntityId,
    pub name: String,
    /// Categorical attribute (free-form text).
    pub gender: String,
    pub birth_date: Option<Date>,
}

/// A titled work together with the performers appearing in it.
///
/// `performers` is a snapshot taken at read time, in storage row order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Work {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub release_date: Option<Date>,
    pub rating: i32,
    pub performers: Vec<Performer>,
}

/// A performer plus every work it appears in. Only ever produced by
/// aggregating join rows; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformerWithWorks {
    #[serde(flatten)]
    pub performer: Performer,
    pub works: Vec<Work>,
}

/// A login account.
///
/// Holds the argon2 password hash, so it must never be serialized to API
/// responses directly. Use [`AccountInfo`] for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: EntityId,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

/// Public view of an [`Account`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountInfo {
    pub id: EntityId,
    pub username: String,
    pub role: Role,
}

impl From<&Account> for AccountInfo {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            role: account.role,
        }
    }
}
