//! Config module

mod cli;
mod constants;
mod env;

pub use cli::Cli;
pub use constants::{DEFAULT_BIND_ADDR, DEFAULT_HOST};
pub use env::Config;
