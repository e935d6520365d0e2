//! Handlers for the `/auth` resource (register, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for both `POST /auth/register` and `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/v1/auth/register
///
/// Create a `user` account. Returns 409 if the username is taken.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    let account = state
        .accounts
        .register(&input.username, &input.password)
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: account })))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = state.accounts.login(&input.username, &input.password).await?;

    Ok(Json(DataResponse { data: outcome }))
}
