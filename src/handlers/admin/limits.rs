// handlers/admin/limits.rs - GET /admin/{maxNumberOfUsers,increase...,decrease...}
//
// The limit endpoints answer with the (new) limit as plain text, matching
// the original wire format. Decrease is deliberately unguarded below zero;
// the registry logs when the limit stops admitting anyone.

use axum::extract::State;

use crate::state::AppState;

/// GET /admin/maxNumberOfUsers
pub async fn max_users(State(state): State<AppState>) -> String {
    state.registry.max_users().to_string()
}

/// GET /admin/increaseMaxNumberOfUsers
pub async fn increase_max_users(State(state): State<AppState>) -> String {
    state.registry.increase_max_users().to_string()
}

/// GET /admin/decreaseMaxNumberOfUsers
pub async fn decrease_max_users(State(state): State<AppState>) -> String {
    state.registry.decrease_max_users().to_string()
}
