//! Command-line argument definition

use clap::Parser;

/// numwords-api command-line arguments
#[derive(Debug, Parser)]
#[command(name = "numwords-api")]
#[command(about = "Number to words web API")]
#[command(version)]
pub struct Cli {
  /// HTTP bind address (overrides the PORT environment variable)
  #[arg(short, long)]
  pub bind: Option<String>,
}
