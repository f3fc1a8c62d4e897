mod cors;
mod server;

pub use cors::{CorsConfig, APP_URL_ENV, DEFAULT_APP_URL};
pub use server::ServerConfig;

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("SERVER_HOST").ok(),
            env::var("SERVER_PORT").ok(),
            app_url_from(env::var(APP_URL_ENV)),
        )
    }

    /// Build configuration from raw variable values; `None` means unset.
    pub fn from_vars(
        host: Option<String>,
        port: Option<String>,
        app_url: Option<String>,
    ) -> AppResult<Self> {
        let defaults = ServerConfig::default();

        let host = host.unwrap_or(defaults.host);
        let port = match port {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::Configuration(format!("Invalid SERVER_PORT: {raw}")))?,
            None => defaults.port,
        };

        Ok(Config {
            server: ServerConfig { host, port },
            cors: CorsConfig::from_app_url(app_url),
        })
    }
}

/// Interpret the lookup of `NEXT_PUBLIC_APP_URL`; a non-UTF-8 value counts as unset.
fn app_url_from(lookup: Result<String, env::VarError>) -> Option<String> {
    match lookup {
        Ok(value) => Some(value),
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(raw)) => {
            tracing::warn!(
                value = ?raw,
                "{} is not valid UTF-8, falling back to {}",
                APP_URL_ENV,
                DEFAULT_APP_URL
            );
            None
        }
    }
}
