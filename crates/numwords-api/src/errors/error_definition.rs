//! API error definition
//!
//! The unified `/api` endpoint renders every request error as a flat
//! `{"error": "<message>"}` JSON body with HTTP 400. The legacy plain-text
//! endpoint does not go through [`IntoResponse`] at all; it maps its own
//! status codes in the handler.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Request body was not valid JSON
  InvalidJson,
  /// No language field in the request
  MissingLanguage,
  /// No numbers left after normalization
  MissingNumber,
  /// Language code not present in the registry
  LanguageNotFound,
  /// Startup configuration error
  Config,
  /// Internal error
  Internal,
}

impl ApiErrorKind {
  /// Stable error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidJson => "invalid_json",
      Self::MissingLanguage => "missing_language",
      Self::MissingNumber => "missing_number",
      Self::LanguageNotFound => "language_not_found",
      Self::Config => "config_error",
      Self::Internal => "internal_error",
    }
  }

  /// HTTP status on the unified endpoint
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidJson | Self::MissingLanguage | Self::MissingNumber | Self::LanguageNotFound => {
        StatusCode::BAD_REQUEST
      }
      Self::Config | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// Request body was not valid JSON
  #[error("invalid json")]
  InvalidJson(#[source] serde_json::Error),

  /// No language field in the request
  #[error("no language specified")]
  MissingLanguage,

  /// No numbers left after normalization
  #[error("no number specified")]
  MissingNumber,

  /// Language code not present in the registry
  #[error("language not found")]
  LanguageNotFound {
    /// The unresolvable language code, kept for logging
    language: String,
  },

  /// Startup configuration error
  #[error("configuration error: {0}")]
  Config(String),

  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),
}

impl ApiError {
  /// The kind of this error
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidJson(_) => ApiErrorKind::InvalidJson,
      Self::MissingLanguage => ApiErrorKind::MissingLanguage,
      Self::MissingNumber => ApiErrorKind::MissingNumber,
      Self::LanguageNotFound { .. } => ApiErrorKind::LanguageNotFound,
      Self::Config(_) => ApiErrorKind::Config,
      Self::Internal(_) => ApiErrorKind::Internal,
    }
  }

  /// Stable error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTP status on the unified endpoint
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates a language-not-found error
  #[must_use]
  pub fn language_not_found(language: impl Into<String>) -> Self {
    Self::LanguageNotFound { language: language.into() }
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }
}

/// Unified-endpoint error body
#[derive(Serialize)]
struct ErrorResponse {
  error: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse { error: self.to_string() };

    (status, Json(body)).into_response()
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
