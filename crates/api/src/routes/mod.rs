pub mod auth;
pub mod health;
pub mod performers;
pub mod works;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
///
/// /performers                          list (user), create (admin)
/// /performers/{id}                     get (user), update, delete (admin)
///
/// /works                               list sorted (user), create (admin)
/// /works/search/title                  title substring search (user)
/// /works/search/performer              performer-name substring search (user)
/// /works/{id}                          get (user), update, delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/performers", performers::router())
        .nest("/works", works::router())
}
