// handlers/mod.rs - 3-Tier Handler Architecture
//
// Public (no auth) -> Owner (Basic auth, own resource or admin override)
// -> Admin (Basic auth, fixed admin identity only)

pub mod admin;
pub mod owner;
pub mod public;
