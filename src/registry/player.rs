use serde::Serialize;
use uuid::Uuid;

/// A registered participant. Identity is the email; the credential is an
/// opaque secret generated at registration and returned to the caller
/// exactly once.
#[derive(Debug, Clone)]
pub struct Player {
    pub email: String,
    pub pseudo: String,
    pub credential: String,
}

impl Player {
    pub fn new(email: impl Into<String>, pseudo: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            pseudo: pseudo.into(),
            credential: generate_credential(),
        }
    }
}

/// Read-only projection of a player plus its current score, produced on
/// demand for the leaderboard and info endpoints. `score` serializes as a
/// bare integer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlayerInfo {
    pub email: String,
    pub pseudo: String,
    pub score: i64,
}

/// 32 lowercase hex characters, 128 bits of entropy.
fn generate_credential() -> String {
    Uuid::new_v4().simple().to_string()
}
