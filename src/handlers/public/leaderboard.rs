// handlers/public/leaderboard.rs - GET /leaderboard

use axum::extract::State;
use axum::Json;

use crate::registry::PlayerInfo;
use crate::state::AppState;

/// GET /leaderboard
///
/// Public snapshot of every registered player, highest score first. An
/// empty registry yields an empty array, never an error.
pub async fn leaderboard(State(state): State<AppState>) -> Json<Vec<PlayerInfo>> {
    Json(state.registry.leaderboard())
}
