//! Per-language converters
//!
//! Each submodule exposes one or more `fn(i64) -> String` conversion
//! functions wired into the default [`Registry`](crate::Registry).

pub mod en;
pub mod fr;
