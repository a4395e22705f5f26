// Tier 1: no authentication required

pub mod leaderboard;
pub mod register;

pub use leaderboard::leaderboard;
pub use register::register;
