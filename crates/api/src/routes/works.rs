//! Route definitions for the `/works` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::works;
use crate::state::AppState;

/// Routes mounted at `/works`.
///
/// ```text
/// GET    /                   -> list_works (?sort=N)
/// POST   /                   -> create_work (admin only)
/// GET    /search/title       -> search_by_title (?fragment=)
/// GET    /search/performer   -> search_by_performer (?fragment=)
/// GET    /{id}               -> get_work
/// PATCH  /{id}               -> update_work (admin only)
/// DELETE /{id}               -> delete_work (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(works::list_works).post(works::create_work))
        .route("/search/title", get(works::search_by_title))
        .route("/search/performer", get(works::search_by_performer))
        .route(
            "/{id}",
            get(works::get_work)
                .patch(works::update_work)
                .delete(works::delete_work),
        )
}
