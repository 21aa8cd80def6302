//! Command-line harness for the bakery relay planner.
//!
//! Owns everything the engine leaves to its caller: configuration, date and
//! day validation, document files and log output.

pub mod commands;
pub mod config;
pub mod error;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use commands::{Cli, run};
pub use config::{Config, LogFormat};
pub use error::CliError;

/// Installs the global tracing subscriber. Logs go to stderr; stdout carries
/// command output only.
pub fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
