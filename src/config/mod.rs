use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub registry: RegistryConfig,
    pub admin: AdminConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Cap on concurrently registered players, adjustable at runtime via
    /// the admin limit endpoints. This is only the starting value.
    pub max_users: i64,
}

/// The fixed administrative identity. Injected configuration rather than a
/// compiled-in constant; outside development there is no default password
/// and admin authentication fails closed until one is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub enable_cors: bool,
    pub enable_request_logging: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("ARENA_MAX_PLAYERS") {
            self.registry.max_users = v.parse().unwrap_or(self.registry.max_users);
        }
        if let Ok(v) = env::var("ARENA_ADMIN_USER") {
            self.admin.user = v;
        }
        if let Ok(v) = env::var("ARENA_ADMIN_PASSWORD") {
            self.admin.password = v;
        }
        if let Ok(v) = env::var("API_ENABLE_CORS") {
            self.api.enable_cors = v.parse().unwrap_or(self.api.enable_cors);
        }
        if let Ok(v) = env::var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }
        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            registry: RegistryConfig { max_users: 3 },
            admin: AdminConfig {
                user: "admin".to_string(),
                password: "admin".to_string(),
            },
            api: ApiConfig {
                enable_cors: true,
                enable_request_logging: true,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            registry: RegistryConfig { max_users: 3 },
            admin: AdminConfig {
                user: "admin".to_string(),
                password: String::new(),
            },
            api: ApiConfig {
                enable_cors: true,
                enable_request_logging: true,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            registry: RegistryConfig { max_users: 3 },
            admin: AdminConfig {
                user: "admin".to_string(),
                password: String::new(),
            },
            api: ApiConfig {
                enable_cors: true,
                enable_request_logging: false,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
