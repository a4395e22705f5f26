// handlers/public/register.rs - POST /player/register

use axum::extract::{Query, State};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterParams {
    pub email: String,
    pub pseudo: String,
    #[serde(rename = "serverURL")]
    pub server_url: String,
}

/// POST /player/register?email&pseudo&serverURL
///
/// Registers a new player pointing at their game server and returns the
/// generated credential as plain text. The credential is shown exactly
/// once; afterwards it can only be verified.
pub async fn register(
    State(state): State<AppState>,
    Query(params): Query<RegisterParams>,
) -> Result<String, ApiError> {
    let credential = state
        .registry
        .register(&params.email, &params.pseudo, &params.server_url)?;
    Ok(credential)
}
