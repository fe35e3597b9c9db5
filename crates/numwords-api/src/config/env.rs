//! Config loading from environment variables

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_HOST};

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "0.0.0.0:8080")
  pub bind_addr: String,
}

impl Config {
  /// Loads configuration from environment variables.
  ///
  /// `PORT` sets the listening port on the default host; when unset the
  /// default bind address applies.
  #[must_use]
  pub fn from_env() -> Self {
    let bind_addr = match std::env::var("PORT") {
      Ok(port) if !port.is_empty() => format!("{DEFAULT_HOST}:{port}"),
      _ => DEFAULT_BIND_ADDR.to_string(),
    };

    Self { bind_addr }
  }

  /// Loads configuration, letting an explicit bind address (the `--bind`
  /// command-line flag) take precedence over the environment.
  #[must_use]
  pub fn load(bind_override: Option<String>) -> Self {
    match bind_override {
      Some(bind_addr) => Self { bind_addr },
      None => Self::from_env(),
    }
  }
}
