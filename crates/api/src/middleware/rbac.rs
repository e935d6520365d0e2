//! Role-based access control (RBAC) extractors.
//!
//! Each extractor runs a [`RoleGate`] over the request's `Authorization`
//! header before the handler body executes. Put them first in the handler's
//! argument list so they run before any path, query, or body extraction.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::gate::{AuthUser, RoleGate, ADMIN_ONLY, ADMIN_OR_USER};
use crate::error::AppError;
use crate::state::AppState;

fn enforce(gate: RoleGate, parts: &Parts, state: &AppState) -> Result<AuthUser, AppError> {
    gate.admit(parts.headers.get(AUTHORIZATION), &state.tokens)
        .map_err(|rejection| {
            tracing::debug!(reason = %rejection, path = %parts.uri.path(), "Request rejected by role gate");
            AppError::from(rejection)
        })
}

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        enforce(ADMIN_ONLY, parts, state).map(RequireAdmin)
    }
}

/// Requires `user` or `admin` role, i.e. any authenticated account.
pub struct RequireUser(pub AuthUser);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        enforce(ADMIN_OR_USER, parts, state).map(RequireUser)
    }
}
