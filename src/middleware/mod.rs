pub mod auth;

pub use auth::{admin_auth_middleware, basic_auth_middleware};
