use crate::config::CorsConfig;

/// Application name reported at startup
pub const APP_NAME: &str = "BooksFlowAI Backend";

/// Application version reported at startup and by `--version`
pub const APP_VERSION: &str = "0.1.0";

/// Application state shared with the router.
///
/// Built once at startup and wrapped in `Arc`; nothing mutates it afterwards,
/// so concurrent handlers read it without synchronization.
#[derive(Debug, Clone)]
pub struct AppState {
    pub name: &'static str,

    pub version: &'static str,

    /// Origins accepted by the CORS layer
    pub allowed_origins: Vec<String>,
}

impl AppState {
    pub fn new(cors: CorsConfig) -> Self {
        Self {
            name: APP_NAME,
            version: APP_VERSION,
            allowed_origins: cors.allowed_origins,
        }
    }

    /// Whether `origin` passes the CORS allow-list; `*` admits any origin.
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.allowed_origins
            .iter()
            .any(|allowed| allowed == "*" || allowed == origin)
    }
}
