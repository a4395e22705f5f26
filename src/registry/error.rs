use thiserror::Error;

/// Failures produced by registry operations. Each variant maps to a
/// distinct wire error code even where the HTTP status is shared (the
/// registration-failure group all surfaces as 403 for compatibility).
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("a player is already registered with email {0}")]
    DuplicateIdentity(String),

    #[error("invalid game server URL {url}: {reason}")]
    InvalidTarget { url: String, reason: String },

    #[error("maximum number of registered players ({0}) reached")]
    CapacityExceeded(i64),

    #[error("no registered player with email {0}")]
    NotFound(String),
}
