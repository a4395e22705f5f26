// handlers/admin/remove_game.rs - POST /admin/removeGame

use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RemoveGameParams {
    pub email: String,
}

/// POST /admin/removeGame?email
///
/// Forced removal of a player and their session, no owner consent needed.
/// Same effect as the player unregistering themselves.
pub async fn remove_game(
    State(state): State<AppState>,
    Query(params): Query<RemoveGameParams>,
) -> Result<StatusCode, ApiError> {
    state.registry.unregister(&params.email)?;
    Ok(StatusCode::NO_CONTENT)
}
