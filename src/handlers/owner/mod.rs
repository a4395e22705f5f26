// Tier 2: owner-authorized lifecycle operations. Callers present their own
// email + credential via Basic auth; the admin identity overrides.

pub mod info;
pub mod lifecycle;
mod utils;

pub use info::player_info;
pub use lifecycle::{pause, reset, resume, unregister};
