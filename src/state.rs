use std::sync::Arc;

use crate::config;
use crate::registry::PlayerRegistry;

/// Shared application state handed to every handler. The registry is the
/// only shared mutable structure in the service; everything else comes
/// from the config singleton.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<PlayerRegistry>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(PlayerRegistry::new(config::config().registry.max_users)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
