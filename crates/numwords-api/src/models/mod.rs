//! Models module

mod request;
mod response;

pub use request::{CanonicalRequest, RawRequest};
pub use response::ApiResponse;
