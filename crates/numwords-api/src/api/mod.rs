//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{api_get, api_post, health_check, legacy_get};
pub use routes::{create_router, run_server};
pub use state::AppState;
