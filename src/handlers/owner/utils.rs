use serde::Deserialize;

use crate::auth::BasicCredentials;
use crate::error::ApiError;
use crate::registry::PlayerRegistry;

#[derive(Debug, Deserialize)]
pub struct EmailParam {
    pub email: String,
}

/// Owner-tier authorization against a target email.
///
/// Admin credentials always pass. Otherwise the caller must authenticate
/// as some registered player; an unauthenticated caller gets 401 before
/// anything is revealed about the target. An authenticated player may only
/// act on their own registration - targeting another registered player is
/// 401, while targeting an email that is not registered at all falls
/// through so the operation itself reports 404.
pub fn authorize_owner(
    registry: &PlayerRegistry,
    credentials: &BasicCredentials,
    target_email: &str,
) -> Result<(), ApiError> {
    if credentials.is_admin() {
        return Ok(());
    }
    if !registry.verify_owner(&credentials.user, &credentials.password) {
        return Err(ApiError::unauthorized("invalid player credentials"));
    }
    if target_email != credentials.user && registry.contains(target_email) {
        return Err(ApiError::unauthorized(
            "players may only manage their own registration",
        ));
    }
    Ok(())
}
