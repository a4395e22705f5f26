// handlers/owner/info.rs - GET /player/info

use axum::extract::{Query, State};
use axum::{Extension, Json};

use crate::auth::BasicCredentials;
use crate::error::ApiError;
use crate::registry::PlayerInfo;
use crate::state::AppState;

use super::utils::{authorize_owner, EmailParam};

/// GET /player/info?email
///
/// Current snapshot of the player: `{email, pseudo, score}` with the score
/// as a bare integer.
pub async fn player_info(
    State(state): State<AppState>,
    Extension(credentials): Extension<BasicCredentials>,
    Query(params): Query<EmailParam>,
) -> Result<Json<PlayerInfo>, ApiError> {
    authorize_owner(&state.registry, &credentials, &params.email)?;
    let info = state.registry.player_info(&params.email)?;
    Ok(Json(info))
}
