//! Handlers for the `/performers` resource.
//!
//! Reads need any authenticated account; writes need an admin.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use filmlib_core::models::Performer;
use filmlib_core::validation::parse_id;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/performers
///
/// Every performer with the works it appears in.
pub async fn list_performers(
    _auth: RequireUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let performers = state.performers.list_with_works().await?;
    Ok(Json(DataResponse { data: performers }))
}

/// POST /api/v1/performers
pub async fn create_performer(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<Performer>,
) -> AppResult<impl IntoResponse> {
    let performer = state.performers.create(input).await?;

    tracing::info!(performer_id = %performer.id, by = %admin.subject, "Performer created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: performer })))
}

/// GET /api/v1/performers/{id}
pub async fn get_performer(
    _auth: RequireUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id, "performer")?;
    let performer = state.performers.get(id).await?;
    Ok(Json(DataResponse { data: performer }))
}

/// PATCH /api/v1/performers/{id}
///
/// Fields left empty in the body keep their stored values.
pub async fn update_performer(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<Performer>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id, "performer")?;
    let performer = state.performers.update(id, patch).await?;

    tracing::info!(performer_id = %id, by = %admin.subject, "Performer updated");

    Ok(Json(DataResponse { data: performer }))
}

/// DELETE /api/v1/performers/{id}
pub async fn delete_performer(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id, "performer")?;
    state.performers.delete(id).await?;

    tracing::info!(performer_id = %id, by = %admin.subject, "Performer deleted");

    Ok(StatusCode::NO_CONTENT)
}
