//! Input checks applied before any storage access.

use crate::error::CoreError;
use crate::types::EntityId;

/// Parse a path or query id into an [`EntityId`].
pub fn parse_id(raw: &str, entity: &str) -> Result<EntityId, CoreError> {
    raw.parse::<EntityId>()
        .map_err(|_| CoreError::Validation(format!("Invalid {entity} id: '{raw}'")))
}

/// Registration and login both require a non-blank username and a
/// non-empty password.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), CoreError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(CoreError::Validation(
            "Username and password are required".into(),
        ));
    }
    Ok(())
}
