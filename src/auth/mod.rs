use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config;

/// Caller identity extracted from an HTTP Basic `Authorization` header.
/// For players the user part is the registered email and the password part
/// is the credential issued at registration.
#[derive(Clone, Debug)]
pub struct BasicCredentials {
    pub user: String,
    pub password: String,
}

impl BasicCredentials {
    /// True when these credentials are the injected admin identity.
    /// Fails closed when no admin password is configured, so a deployment
    /// that forgot to set one does not ship an open admin tier.
    pub fn is_admin(&self) -> bool {
        let admin = &config::config().admin;
        !admin.password.is_empty() && self.user == admin.user && self.password == admin.password
    }
}

/// Parse a `Basic base64(user:password)` header value.
pub fn parse_basic_header(value: &str) -> Result<BasicCredentials, String> {
    let encoded = value
        .strip_prefix("Basic ")
        .ok_or_else(|| "Authorization header must use Basic scheme".to_string())?;

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| "Invalid base64 in Authorization header".to_string())?;

    let decoded =
        String::from_utf8(decoded).map_err(|_| "Authorization header is not UTF-8".to_string())?;

    // The password may itself contain ':', so split on the first one only.
    let (user, password) = decoded
        .split_once(':')
        .ok_or_else(|| "Authorization header must contain user:password".to_string())?;

    Ok(BasicCredentials {
        user: user.to_string(),
        password: password.to_string(),
    })
}
