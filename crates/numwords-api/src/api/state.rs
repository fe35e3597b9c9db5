//! API state definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::WordsService;

/// Application state shared across the entire server.
///
/// Nothing in here is mutable after startup, so handlers running
/// concurrently only ever read it.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Conversion service
  ///
  /// - Production: `Arc::new(RegistryWordsService::new(registry))`
  /// - Test: any stub implementing `WordsService`
  pub service: Arc<dyn WordsService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn WordsService>) -> Self {
    Self { config, service }
  }
}
