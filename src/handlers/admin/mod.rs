// Tier 3: admin-only operations behind the injected admin identity.

pub mod limits;
pub mod players_csv;
pub mod register_with_score;
pub mod remove_game;

pub use limits::{decrease_max_users, increase_max_users, max_users};
pub use players_csv::{export_players_csv, import_players_csv};
pub use register_with_score::register_with_score;
pub use remove_game::remove_game;
