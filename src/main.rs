//! Storyfeed CLI entrypoint: builds the static feedback pages or previews
//! them in the terminal.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use storyfeed::{FeedError, OperationMode, StoryfeedConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), FeedError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::Build => cli::build::run(&config),
        OperationMode::Preview => cli::preview::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`FeedError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<StoryfeedConfig, FeedError> {
    StoryfeedConfig::load().map_err(|error| FeedError::Configuration {
        message: error.to_string(),
    })
}
