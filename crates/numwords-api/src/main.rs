//! numwords-api server entry point

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use numwords::Registry;
use numwords_api::ApiError;
use numwords_api::api::AppState;
use numwords_api::api::run_server;
use numwords_api::config::{Cli, Config};
use numwords_api::service::{RegistryWordsService, WordsService};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let cli = Cli::parse();
  let config = Config::load(cli.bind);
  tracing::info!(bind_addr = %config.bind_addr, "configuration loaded");

  let registry = Arc::new(Registry::with_default_languages());
  tracing::info!(languages = ?registry.codes(), "language registry ready");

  let service: Arc<dyn WordsService> = Arc::new(RegistryWordsService::new(registry));
  let state = AppState::new(config, service);

  run_server(state).await
}
