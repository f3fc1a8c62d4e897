//! BooksFlowAI backend service shell.
//!
//! Exposes a single liveness endpoint behind a credentialed CORS policy
//! whose allowed origin comes from `NEXT_PUBLIC_APP_URL`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
