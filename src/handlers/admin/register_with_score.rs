// handlers/admin/register_with_score.rs - POST /player/register-with-score

use axum::extract::{Query, State};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterWithScoreParams {
    pub email: String,
    pub pseudo: String,
    #[serde(rename = "serverURL")]
    pub server_url: String,
    pub score: i64,
}

/// POST /player/register-with-score?email&pseudo&serverURL&score
///
/// Admin registration that seeds the session with an explicit initial
/// score. The score is stored as given - negative values included - and
/// becomes the target of any later reset.
pub async fn register_with_score(
    State(state): State<AppState>,
    Query(params): Query<RegisterWithScoreParams>,
) -> Result<String, ApiError> {
    let credential = state.registry.register_with_score(
        &params.email,
        &params.pseudo,
        &params.server_url,
        params.score,
    )?;
    Ok(credential)
}
