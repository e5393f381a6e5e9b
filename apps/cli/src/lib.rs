// Library exports for testing
// The binary (main.rs) imports these as well

pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod logger;

use crate::error::CliError;

use client_core::config::{AppConfig, default_config_dir};

use std::path::{Path, PathBuf};

/// `--config-dir` when given, the platform config directory otherwise.
pub fn resolve_config_dir(config_dir: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match config_dir {
        Some(dir) => Ok(dir),
        None => Ok(default_config_dir()?),
    }
}

/// Config file plus `.env`/environment overrides.
pub fn load_config(config_dir: &Path) -> Result<AppConfig, CliError> {
    let mut config = AppConfig::load(config_dir)?;
    config.apply_env_overrides()?;
    Ok(config)
}

#[cfg(test)]
mod tests;
