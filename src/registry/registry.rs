use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use url::Url;

use super::error::RegistryError;
use super::player::{Player, PlayerInfo};
use super::session::GameSession;

/// Shared mutable registry of live game sessions plus the process-wide
/// player capacity limit. All mutation funnels through the write lock so
/// the uniqueness and capacity invariants hold under concurrent requests:
/// the duplicate check, the capacity check, and the insert happen under a
/// single lock acquisition. URL parsing happens before the lock is taken;
/// nothing does I/O while holding it.
#[derive(Debug)]
pub struct PlayerRegistry {
    inner: RwLock<RegistryInner>,
}

#[derive(Debug)]
struct RegistryInner {
    games: HashMap<String, GameSession>,
    max_users: i64,
}

impl PlayerRegistry {
    pub fn new(max_users: i64) -> Self {
        Self {
            inner: RwLock::new(RegistryInner {
                games: HashMap::new(),
                max_users,
            }),
        }
    }

    /// Register a new player and return the generated credential. The
    /// credential is only ever returned here; afterwards it can only be
    /// verified, not read back.
    pub fn register(
        &self,
        email: &str,
        pseudo: &str,
        server_url: &str,
    ) -> Result<String, RegistryError> {
        self.register_with_score(email, pseudo, server_url, 0)
    }

    /// Admin variant of register that seeds the session with an explicit
    /// initial score. The score is accepted as-is, negatives included.
    pub fn register_with_score(
        &self,
        email: &str,
        pseudo: &str,
        server_url: &str,
        score: i64,
    ) -> Result<String, RegistryError> {
        // Validate only; the session keeps the caller's exact string so
        // CSV export round-trips it unnormalized.
        Url::parse(server_url).map_err(|e| RegistryError::InvalidTarget {
            url: server_url.to_string(),
            reason: e.to_string(),
        })?;

        let mut inner = self.write();
        if inner.games.contains_key(email) {
            return Err(RegistryError::DuplicateIdentity(email.to_string()));
        }
        if inner.games.len() as i64 >= inner.max_users {
            return Err(RegistryError::CapacityExceeded(inner.max_users));
        }

        let player = Player::new(email, pseudo);
        let credential = player.credential.clone();
        inner.games.insert(
            email.to_string(),
            GameSession::new(player, server_url.to_string(), score),
        );
        tracing::info!(email, pseudo, "player registered");
        Ok(credential)
    }

    pub fn pause(&self, email: &str) -> Result<(), RegistryError> {
        self.with_session(email, |s| s.pause())
    }

    pub fn resume(&self, email: &str) -> Result<(), RegistryError> {
        self.with_session(email, |s| s.resume())
    }

    pub fn reset(&self, email: &str) -> Result<(), RegistryError> {
        self.with_session(email, |s| s.reset())
    }

    /// Destroy the player and its session together.
    pub fn unregister(&self, email: &str) -> Result<(), RegistryError> {
        let mut inner = self.write();
        inner
            .games
            .remove(email)
            .map(|_| tracing::info!(email, "player unregistered"))
            .ok_or_else(|| RegistryError::NotFound(email.to_string()))
    }

    pub fn contains(&self, email: &str) -> bool {
        self.read().games.contains_key(email)
    }

    pub fn player_info(&self, email: &str) -> Result<PlayerInfo, RegistryError> {
        let inner = self.read();
        inner
            .games
            .get(email)
            .map(GameSession::info)
            .ok_or_else(|| RegistryError::NotFound(email.to_string()))
    }

    /// True when `credential` matches the registered credential for
    /// `email`. Unknown emails verify as false rather than erroring so the
    /// auth path cannot be used to probe which emails are registered.
    pub fn verify_owner(&self, email: &str, credential: &str) -> bool {
        let inner = self.read();
        inner
            .games
            .get(email)
            .is_some_and(|s| s.player.credential == credential)
    }

    /// Snapshot of every registered player, highest score first (ties
    /// break on email for a stable ordering).
    pub fn leaderboard(&self) -> Vec<PlayerInfo> {
        let inner = self.read();
        let mut infos: Vec<PlayerInfo> = inner.games.values().map(GameSession::info).collect();
        infos.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.email.cmp(&b.email)));
        infos
    }

    /// Roster dump: one line per player, `"email","pseudo","serverURL",score`,
    /// no header and no trailing newline.
    pub fn export_csv(&self) -> String {
        let inner = self.read();
        let mut sessions: Vec<&GameSession> = inner.games.values().collect();
        sessions.sort_by(|a, b| a.player.email.cmp(&b.player.email));
        sessions
            .iter()
            .map(|s| {
                format!(
                    "\"{}\",\"{}\",\"{}\",{}",
                    s.player.email,
                    s.player.pseudo,
                    s.url,
                    s.score()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Seam for bulk roster import. Intent is unresolved upstream, so this
    /// reads the payload and applies nothing; it returns the number of
    /// rows applied (currently always 0) so a future implementation keeps
    /// the signature.
    pub fn bulk_import(&self, payload: &str) -> usize {
        let first_line = payload.lines().next().unwrap_or_default();
        tracing::info!(first_line, "bulk import received; import is not applied");
        0
    }

    pub fn max_users(&self) -> i64 {
        self.read().max_users
    }

    pub fn increase_max_users(&self) -> i64 {
        let mut inner = self.write();
        inner.max_users += 1;
        inner.max_users
    }

    /// Lowers the limit by one. Deliberately unguarded below zero and below
    /// the live player count; both conditions are logged so operators can
    /// see a limit that no longer admits anyone.
    pub fn decrease_max_users(&self) -> i64 {
        let mut inner = self.write();
        inner.max_users -= 1;
        if inner.max_users < 0 {
            tracing::warn!(max_users = inner.max_users, "player limit is negative");
        } else if (inner.games.len() as i64) > inner.max_users {
            tracing::warn!(
                max_users = inner.max_users,
                registered = inner.games.len(),
                "player limit is below the number of registered players"
            );
        }
        inner.max_users
    }

    fn with_session<F>(&self, email: &str, f: F) -> Result<(), RegistryError>
    where
        F: FnOnce(&mut GameSession),
    {
        let mut inner = self.write();
        match inner.games.get_mut(email) {
            Some(session) => {
                f(session);
                Ok(())
            }
            None => Err(RegistryError::NotFound(email.to_string())),
        }
    }

    // Lock poisoning only happens if a panic escaped while holding the
    // guard; the map is still structurally sound, so recover the guard.
    fn read(&self) -> RwLockReadGuard<'_, RegistryInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::session::SessionState;

    fn registry() -> PlayerRegistry {
        PlayerRegistry::new(3)
    }

    #[test]
    fn register_returns_credential_and_seeds_score_zero() {
        let reg = registry();
        let credential = reg
            .register("player@provider.com", "player", "http://localhost")
            .unwrap();
        assert_eq!(credential.len(), 32);
        assert_eq!(reg.player_info("player@provider.com").unwrap().score, 0);
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let reg = registry();
        reg.register("player@provider.com", "player", "http://localhost")
            .unwrap();
        let err = reg
            .register("player@provider.com", "other", "http://localhost")
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateIdentity(_)));
    }

    #[test]
    fn malformed_server_url_is_rejected() {
        let reg = registry();
        let err = reg
            .register("player@provider.com", "player", "not a url")
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidTarget { .. }));
    }

    #[test]
    fn capacity_limit_rejects_the_fourth_registration() {
        let reg = registry();
        for i in 0..3 {
            reg.register(&format!("p{i}@provider.com"), "p", "http://localhost")
                .unwrap();
        }
        let err = reg
            .register("p3@provider.com", "p", "http://localhost")
            .unwrap_err();
        assert!(matches!(err, RegistryError::CapacityExceeded(3)));
    }

    #[test]
    fn unregister_frees_a_capacity_slot() {
        let reg = PlayerRegistry::new(1);
        reg.register("a@provider.com", "a", "http://localhost")
            .unwrap();
        reg.unregister("a@provider.com").unwrap();
        reg.register("b@provider.com", "b", "http://localhost")
            .unwrap();
    }

    #[test]
    fn lifecycle_operations_on_unknown_email_are_not_found() {
        let reg = registry();
        assert!(matches!(
            reg.pause("ghost@provider.com").unwrap_err(),
            RegistryError::NotFound(_)
        ));
        assert!(matches!(
            reg.reset("ghost@provider.com").unwrap_err(),
            RegistryError::NotFound(_)
        ));
        assert!(matches!(
            reg.unregister("ghost@provider.com").unwrap_err(),
            RegistryError::NotFound(_)
        ));
    }

    #[test]
    fn reset_restores_registration_score() {
        let reg = registry();
        reg.register_with_score("player@provider.com", "player", "http://localhost", 493)
            .unwrap();
        reg.pause("player@provider.com").unwrap();
        reg.reset("player@provider.com").unwrap();
        let info = reg.player_info("player@provider.com").unwrap();
        assert_eq!(info.score, 493);
    }

    #[test]
    fn verify_owner_matches_only_the_issued_credential() {
        let reg = registry();
        let credential = reg
            .register("player@provider.com", "player", "http://localhost")
            .unwrap();
        assert!(reg.verify_owner("player@provider.com", &credential));
        assert!(!reg.verify_owner("player@provider.com", "wrong"));
        assert!(!reg.verify_owner("ghost@provider.com", &credential));
    }

    #[test]
    fn leaderboard_is_sorted_by_score_descending() {
        let reg = registry();
        reg.register_with_score("low@provider.com", "low", "http://localhost", 1)
            .unwrap();
        reg.register_with_score("high@provider.com", "high", "http://localhost", 100)
            .unwrap();
        let board = reg.leaderboard();
        assert_eq!(board[0].email, "high@provider.com");
        assert_eq!(board[1].email, "low@provider.com");
    }

    #[test]
    fn empty_leaderboard_is_an_empty_vec() {
        assert!(registry().leaderboard().is_empty());
    }

    #[test]
    fn csv_export_quotes_strings_and_leaves_score_bare() {
        let reg = registry();
        reg.register("player@provider.com", "player", "http://localhost")
            .unwrap();
        assert_eq!(
            reg.export_csv(),
            "\"player@provider.com\",\"player\",\"http://localhost\",0"
        );
    }

    #[test]
    fn csv_export_joins_lines_without_trailing_newline() {
        let reg = registry();
        reg.register("a@provider.com", "a", "http://localhost")
            .unwrap();
        reg.register("b@provider.com", "b", "http://localhost")
            .unwrap();
        let csv = reg.export_csv();
        assert_eq!(csv.lines().count(), 2);
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn bulk_import_applies_nothing() {
        let reg = registry();
        let applied = reg.bulk_import("\"a@provider.com\",\"a\",\"http://localhost\",-2");
        assert_eq!(applied, 0);
        assert!(reg.leaderboard().is_empty());
    }

    #[test]
    fn limit_round_trips_through_increase_and_decrease() {
        let reg = registry();
        assert_eq!(reg.max_users(), 3);
        assert_eq!(reg.increase_max_users(), 4);
        assert_eq!(reg.decrease_max_users(), 3);
    }

    #[test]
    fn limit_decrease_below_zero_is_unguarded() {
        let reg = PlayerRegistry::new(0);
        assert_eq!(reg.decrease_max_users(), -1);
    }

    #[test]
    fn session_starts_running() {
        let reg = registry();
        reg.register("player@provider.com", "player", "http://localhost")
            .unwrap();
        let inner = reg.read();
        assert_eq!(
            inner.games["player@provider.com"].state(),
            SessionState::Running
        );
    }
}
