// handlers/owner/lifecycle.rs - POST /player/{pause,resume,reset,unregister}

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Extension;

use crate::auth::BasicCredentials;
use crate::error::ApiError;
use crate::state::AppState;

use super::utils::{authorize_owner, EmailParam};

/// POST /player/pause?email - suspend the player's game session.
/// Idempotent: pausing a paused session succeeds.
pub async fn pause(
    State(state): State<AppState>,
    Extension(credentials): Extension<BasicCredentials>,
    Query(params): Query<EmailParam>,
) -> Result<StatusCode, ApiError> {
    authorize_owner(&state.registry, &credentials, &params.email)?;
    state.registry.pause(&params.email)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /player/resume?email - resume a suspended game session.
pub async fn resume(
    State(state): State<AppState>,
    Extension(credentials): Extension<BasicCredentials>,
    Query(params): Query<EmailParam>,
) -> Result<StatusCode, ApiError> {
    authorize_owner(&state.registry, &credentials, &params.email)?;
    state.registry.resume(&params.email)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /player/reset?email - return the session to its initial state:
/// the score it was registered with, running.
pub async fn reset(
    State(state): State<AppState>,
    Extension(credentials): Extension<BasicCredentials>,
    Query(params): Query<EmailParam>,
) -> Result<StatusCode, ApiError> {
    authorize_owner(&state.registry, &credentials, &params.email)?;
    state.registry.reset(&params.email)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /player/unregister?email - destroy the player and their session.
/// The email becomes free for a fresh registration.
pub async fn unregister(
    State(state): State<AppState>,
    Extension(credentials): Extension<BasicCredentials>,
    Query(params): Query<EmailParam>,
) -> Result<StatusCode, ApiError> {
    authorize_owner(&state.registry, &credentials, &params.email)?;
    state.registry.unregister(&params.email)?;
    Ok(StatusCode::NO_CONTENT)
}
