//! Route definitions for the `/performers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::performers;
use crate::state::AppState;

/// Routes mounted at `/performers`.
///
/// ```text
/// GET    /       -> list_performers
/// POST   /       -> create_performer (admin only)
/// GET    /{id}   -> get_performer
/// PATCH  /{id}   -> update_performer (admin only)
/// DELETE /{id}   -> delete_performer (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(performers::list_performers).post(performers::create_performer),
        )
        .route(
            "/{id}",
            get(performers::get_performer)
                .patch(performers::update_performer)
                .delete(performers::delete_performer),
        )
}
