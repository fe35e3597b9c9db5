//! API configuration constants

/// Default bind address when neither the `--bind` flag nor the `PORT`
/// environment variable is set.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Host used when only a port is supplied via the `PORT` environment
/// variable.
pub const DEFAULT_HOST: &str = "0.0.0.0";
