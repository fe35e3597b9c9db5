//! Router definition

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::handlers::{api_get, api_post, health_check, legacy_get};
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router.
///
/// The legacy two-segment route cannot shadow `/api` or `/health`; axum
/// prefers the literal single-segment routes.
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/api", get(api_get).post(api_post))
    .route("/health", get(health_check))
    .route("/{language}/{number}", get(legacy_get))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Binds the configured address and serves the router.
///
/// # Errors
/// Returns an error when the listener cannot bind or the server fails.
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = &state.config.bind_addr;
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  tracing::info!("listening on http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::config::Config;
  use crate::errors::Result as ApiResult;
  use crate::service::WordsService;

  /// Dummy service that never converts anything.
  #[derive(Clone)]
  struct DummyService;

  impl WordsService for DummyService {
    fn convert_all(&self, _language: &str, numbers: &[i64]) -> ApiResult<Vec<(i64, String)>> {
      Ok(numbers.iter().map(|&n| (n, String::new())).collect())
    }
  }

  #[test]
  fn test_router_creation() {
    let config = Config { bind_addr: "127.0.0.1:0".to_string() };
    let service = Arc::new(DummyService) as Arc<dyn WordsService>;
    let state = AppState::new(config, service);
    let _router = create_router(state);
  }
}
