use serde::{Deserialize, Serialize};

/// Environment variable holding the externally visible frontend URL
pub const APP_URL_ENV: &str = "NEXT_PUBLIC_APP_URL";

/// Origin used when `NEXT_PUBLIC_APP_URL` is unset or empty
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";

/// CORS configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Origins allowed to make credentialed cross-origin requests. Never empty.
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Build the allow-list from the raw value of `NEXT_PUBLIC_APP_URL`.
    ///
    /// The value is taken verbatim; no URL validation is performed.
    pub fn from_app_url(value: Option<String>) -> Self {
        let origin = value
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_APP_URL.to_string());

        Self {
            allowed_origins: vec![origin],
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::from_app_url(None)
    }
}
