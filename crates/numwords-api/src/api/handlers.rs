//! HTTP handler definitions
//!
//! Two independent contracts share this server: the unified JSON `/api`
//! endpoint (extract, normalize, dispatch, shape) and the legacy
//! plain-text `/{language}/{number}` endpoint with its own status-code
//! mapping. They share no state beyond the read-only [`AppState`].

use axum::{
  Json,
  body::Bytes,
  extract::{Path, Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use tracing::{debug, info};

use crate::errors::{ApiError, Result};
use crate::models::{ApiResponse, RawRequest};

use super::state::AppState;

/// POST /api
///
/// Accepts `{"language": str, "number": int}` and/or
/// `{"language": str, "numbers": [int...]}`.
///
/// # Response
/// - 200 OK: `{"word": str}` (one number) or `{"<n>": str, ...}` (several)
/// - 400 Bad Request: `{"error": str}` for invalid JSON, missing fields or
///   an unknown language
pub async fn api_post(
  State(state): State<AppState>,
  body: Bytes,
) -> Result<Json<ApiResponse>> {
  // Body bytes are decoded here rather than through the Json extractor so
  // parse failures render in this endpoint's own error shape.
  let raw = RawRequest::from_json(&body)?;
  dispatch(&state, raw)
}

/// GET /api
///
/// Accepts `language=<str>` plus numbers as repeated `number=<int>` params
/// and/or a comma-separated `numbers=` param. Unparseable numeric tokens
/// are silently discarded.
pub async fn api_get(
  State(state): State<AppState>,
  Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ApiResponse>> {
  let raw = RawRequest::from_query_pairs(&pairs);
  dispatch(&state, raw)
}

/// Shared unified-endpoint tail: normalize, dispatch, shape.
///
/// Fails fast at the first invalid stage; no partial dispatch.
fn dispatch(state: &AppState, raw: RawRequest) -> Result<Json<ApiResponse>> {
  let canonical = raw.normalize()?;

  debug!(
    language = %canonical.language,
    count = canonical.numbers.len(),
    "dispatching conversion"
  );

  let results = state.service.convert_all(&canonical.language, &canonical.numbers)?;

  info!(language = %canonical.language, count = results.len(), "conversion complete");

  Ok(Json(ApiResponse::from_results(&results)))
}

/// GET /{language}/{number}
///
/// Legacy singular plain-text contract. Terminal in one of four states:
/// - 400: path number segment does not parse as an integer
/// - 404: unknown language
/// - 500: number not supported for this language (empty conversion)
/// - 200: words followed by a newline
pub async fn legacy_get(
  State(state): State<AppState>,
  Path((language, number)): Path<(String, String)>,
) -> Response {
  let number: i64 = match number.parse() {
    Ok(number) => number,
    Err(err) => {
      debug!(token = %number, "legacy request with unparseable number");
      return (StatusCode::BAD_REQUEST, format!("invalid input number {number:?}: {err}\n"))
        .into_response();
    }
  };

  match state.service.convert_all(&language, &[number]) {
    Err(ApiError::LanguageNotFound { .. }) => {
      debug!(language = %language, "legacy request for unknown language");
      (StatusCode::NOT_FOUND, format!("no such language {language:?}\n")).into_response()
    }
    Err(err) => {
      (StatusCode::INTERNAL_SERVER_ERROR, format!("{err}\n")).into_response()
    }
    Ok(results) => match results.first() {
      Some((_, words)) if !words.is_empty() => {
        (StatusCode::OK, format!("{words}\n")).into_response()
      }
      _ => (
        StatusCode::INTERNAL_SERVER_ERROR,
        "number not supported for this language\n".to_string(),
      )
        .into_response(),
    },
  }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
  "OK"
}
