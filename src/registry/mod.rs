// Player registry domain core: players, game sessions, and the
// lock-guarded registry that owns them.

pub mod error;
pub mod player;
pub mod registry;
pub mod session;

pub use error::RegistryError;
pub use player::{Player, PlayerInfo};
pub use registry::PlayerRegistry;
pub use session::{GameSession, SessionState};
