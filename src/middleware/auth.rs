use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{parse_basic_header, BasicCredentials};
use crate::error::ApiError;

/// Basic-auth middleware for owner-tier routes: validates the
/// Authorization header and injects the parsed [`BasicCredentials`] into
/// the request so handlers can decide owner-vs-admin against the target
/// resource. Whether the credentials match anything is the handler's
/// problem; a missing or malformed header ends the request here with 401.
pub async fn basic_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let credentials = extract_credentials(&headers)?;
    request.extensions_mut().insert(credentials);
    Ok(next.run(request).await)
}

/// Admin gate for privileged routes: only the configured admin identity
/// passes, regardless of any player credentials presented.
pub async fn admin_auth_middleware(
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let credentials = extract_credentials(&headers)?;
    if !credentials.is_admin() {
        return Err(ApiError::unauthorized("admin credentials required"));
    }
    Ok(next.run(request).await)
}

fn extract_credentials(headers: &HeaderMap) -> Result<BasicCredentials, ApiError> {
    let header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    let value = header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

    parse_basic_header(value).map_err(ApiError::unauthorized)
}
