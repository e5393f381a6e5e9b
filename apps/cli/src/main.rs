use storefront_cli::cli::Cli;
use storefront_cli::commands;
use storefront_cli::context::CliContext;
use storefront_cli::error::CliError;
use storefront_cli::logger::initialize as LoggerInitialize;
use storefront_cli::{load_config, resolve_config_dir};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("Command failed: {e}");
            eprintln!("{}", e.message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let config_dir = resolve_config_dir(cli.config_dir)?;

    create_dir_all(&config_dir).map_err(|e| CliError::Cli {
        message: format!("Failed to create config directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&config_dir, cli.verbose)?;
    info!("Config directory: {}", config_dir.display());

    let config = load_config(&config_dir)?;
    let ctx = CliContext::new(config, &config_dir)?;

    commands::run(cli.command, &ctx, cli.json).await
}
