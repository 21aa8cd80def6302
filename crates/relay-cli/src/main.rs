//! `relay` binary entry point.

use std::process::ExitCode;

use clap::Parser;
use relay_cli::{Cli, Config};

fn main() -> ExitCode {
    // 1. Parse arguments (clap exits on its own for --help and usage errors)
    let cli = Cli::parse();

    // 2. Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(err.exit_code());
        }
    };

    // 3. Initialize tracing
    relay_cli::init_tracing(&config);

    // 4. Run the command
    match relay_cli::run(cli, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
