pub mod health;
mod router;
pub mod types;

pub use router::{cors_layer, create_router};

// Re-export AppState for convenience
pub use crate::state::AppState;
