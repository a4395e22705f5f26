// handlers/admin/players_csv.rs - GET/POST /players.csv

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /players.csv
///
/// Roster dump as `text/csv`: one `"email","pseudo","serverURL",score`
/// line per player, no header row, no trailing newline.
pub async fn export_players_csv(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/csv")],
        state.registry.export_csv(),
    )
}

/// POST /players.csv (multipart, field `file`)
///
/// Bulk-import seam. The upload is read and acknowledged with 204 but not
/// applied; `PlayerRegistry::bulk_import` is the single place to complete
/// once the intended row semantics (create vs. update) are decided.
pub async fn import_players_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<StatusCode, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let payload = field.text().await?;
            state.registry.bulk_import(&payload);
            return Ok(StatusCode::NO_CONTENT);
        }
    }
    Err(ApiError::bad_request("multipart upload is missing the 'file' field"))
}
