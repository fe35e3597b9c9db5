//! numwords-api crate
//!
//! Web server exposing number-to-words conversion as an HTTP API.
//!
//! ## Endpoints
//! - `GET|POST /api` - Unified JSON endpoint (singular or plural number fields)
//! - `GET /{language}/{number}` - Legacy plain-text endpoint
//! - `GET /health` - Health check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8080/api \
//!   -H "Content-Type: application/json" \
//!   -d '{"language": "en-us", "numbers": [1, 2, 3]}'
//!
//! curl 'http://127.0.0.1:8080/api?language=en-us&number=42'
//! curl http://127.0.0.1:8080/en-us/42
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{ApiResponse, CanonicalRequest, RawRequest};
pub use service::{RegistryWordsService, WordsService};
