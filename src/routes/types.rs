use serde::Serialize;

/// Body returned by `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub const fn ok() -> Self {
        Self { status: "ok" }
    }
}
