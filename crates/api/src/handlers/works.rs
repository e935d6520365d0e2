//! Handlers for the `/works` resource.
//!
//! Reads need any authenticated account; writes need an admin.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use filmlib_core::models::Work;
use filmlib_core::sorting::SortMode;
use filmlib_core::validation::parse_id;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /works`.
#[derive(Debug, Deserialize)]
pub struct SortParams {
    /// `1` = title, `2` = release date, any other number = rating.
    /// Required: a missing flag is rejected like any unparseable one.
    #[serde(default)]
    pub sort: String,
}

/// Query parameters for the search endpoints. A missing fragment matches
/// everything.
#[derive(Debug, Deserialize)]
pub struct FragmentParams {
    #[serde(default)]
    pub fragment: String,
}

/// GET /api/v1/works?sort=N
pub async fn list_works(
    _auth: RequireUser,
    State(state): State<AppState>,
    Query(params): Query<SortParams>,
) -> AppResult<impl IntoResponse> {
    let mode = SortMode::parse(&params.sort)?;
    let works = state.works.list_sorted(mode).await?;
    Ok(Json(DataResponse { data: works }))
}

/// GET /api/v1/works/search/title?fragment=
pub async fn search_by_title(
    _auth: RequireUser,
    State(state): State<AppState>,
    Query(params): Query<FragmentParams>,
) -> AppResult<impl IntoResponse> {
    let works = state.works.search_by_title(&params.fragment).await?;
    Ok(Json(DataResponse { data: works }))
}

/// GET /api/v1/works/search/performer?fragment=
pub async fn search_by_performer(
    _auth: RequireUser,
    State(state): State<AppState>,
    Query(params): Query<FragmentParams>,
) -> AppResult<impl IntoResponse> {
    let works = state
        .works
        .search_by_performer_name(&params.fragment)
        .await?;
    Ok(Json(DataResponse { data: works }))
}

/// POST /api/v1/works
///
/// `performers` in the body only needs each performer's `id`.
pub async fn create_work(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<Work>,
) -> AppResult<impl IntoResponse> {
    let work = state.works.create(input).await?;

    tracing::info!(
        work_id = %work.id,
        performers = work.performers.len(),
        by = %admin.subject,
        "Work created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: work })))
}

/// GET /api/v1/works/{id}
pub async fn get_work(
    _auth: RequireUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id, "work")?;
    let work = state.works.get(id).await?;
    Ok(Json(DataResponse { data: work }))
}

/// PATCH /api/v1/works/{id}
///
/// A non-empty `performers` list replaces the stored links wholesale.
pub async fn update_work(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<Work>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id, "work")?;
    let work = state.works.update(id, patch).await?;

    tracing::info!(work_id = %id, by = %admin.subject, "Work updated");

    Ok(Json(DataResponse { data: work }))
}

/// DELETE /api/v1/works/{id}
pub async fn delete_work(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id, "work")?;
    state.works.delete(id).await?;

    tracing::info!(work_id = %id, by = %admin.subject, "Work deleted");

    Ok(StatusCode::NO_CONTENT)
}
