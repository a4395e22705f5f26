use super::player::{Player, PlayerInfo};

/// Run state of a game session. Pause and resume are idempotent: pausing
/// an already-paused session is a no-op success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Paused,
}

/// The game-engine state associated with one registered player: the remote
/// game-server URL the player operates, the current score, and the initial
/// score used by reset. One session per player, owned by the registry and
/// destroyed with it on unregister.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub player: Player,
    /// Validated at registration; kept verbatim as supplied so exports
    /// round-trip the URL exactly as the player gave it.
    pub url: String,
    score: i64,
    initial_score: i64,
    state: SessionState,
}

impl GameSession {
    pub fn new(player: Player, url: String, initial_score: i64) -> Self {
        Self {
            player,
            url,
            score: initial_score,
            initial_score,
            state: SessionState::Running,
        }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn pause(&mut self) {
        self.state = SessionState::Paused;
    }

    pub fn resume(&mut self) {
        self.state = SessionState::Running;
    }

    /// Returns the session to its initial state: initial score, running.
    pub fn reset(&mut self) {
        self.score = self.initial_score;
        self.state = SessionState::Running;
    }

    pub fn info(&self) -> PlayerInfo {
        PlayerInfo {
            email: self.player.email.clone(),
            pseudo: self.player.pseudo.clone(),
            score: self.score,
        }
    }
}
