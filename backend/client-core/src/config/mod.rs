use crate::error::config::ConfigError;
use crate::interceptor::SessionSettings;
use crate::{ACCESS_TOKEN_STORAGE_KEY, DEFAULT_API_BASE_URL, SIGN_IN_ROUTE};

use common::ErrorLocation;

use std::env::VarError;
use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_DIRECTORY_NAME: &str = "storefront";
const CONFIG_VERSION: u32 = 1;
const API_URL_ENV_VAR: &str = "STOREFRONT_API_URL";
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_access_token_key")]
    pub access_token_key: String,
    #[serde(default = "default_sign_in_route")]
    pub sign_in_route: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            access_token_key: default_access_token_key(),
            sign_in_route: default_sign_in_route(),
        }
    }
}

impl From<&SessionConfig> for SessionSettings {
    fn from(config: &SessionConfig) -> Self {
        SessionSettings {
            access_token_key: config.access_token_key.clone(),
            sign_in_route: config.sign_in_route.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_credentials_file")]
    pub credentials_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            credentials_file: default_credentials_file(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            api: ApiConfig::default(),
            session: SessionConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_access_token_key() -> String {
    ACCESS_TOKEN_STORAGE_KEY.to_string()
}
fn default_sign_in_route() -> String {
    SIGN_IN_ROUTE.to_string()
}
fn default_credentials_file() -> String {
    "storage.json".to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

/// `{platform config dir}/storefront`, if the platform has one.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIRECTORY_NAME))
        .ok_or_else(|| ConfigError::DirectoryNotFound {
            location: ErrorLocation::from(Location::caller()),
        })
}

impl AppConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// A missing file yields defaults. A file that exists but cannot be read,
    /// parsed or validated is an error.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let contents = match std::fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "Config file not found at {}, using defaults",
                    config_path.display()
                );
                return Ok(Self::default());
            }
            Err(e) => {
                warn!("Failed to read config file: {e}");
                return Err(ConfigError::ReadError {
                    location: ErrorLocation::from(Location::caller()),
                    path: config_path,
                    source: e,
                });
            }
        };

        let config: AppConfig =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            })?;

        config.validate()?;

        debug!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Validate, then write {config_dir}/config.json through a temp file and rename.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        let write_error = |path: &Path, source: std::io::Error| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source,
        };

        std::fs::create_dir_all(config_dir).map_err(|e| write_error(config_dir, e))?;

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_path.with_extension("json.tmp");

        std::fs::write(&temp_path, json).map_err(|e| write_error(&temp_path, e))?;
        std::fs::rename(&temp_path, &config_path).map_err(|e| write_error(&config_path, e))?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Apply `.env` and environment overrides, then re-validate.
    ///
    /// A missing `.env` file is not an error; a non-UTF-8 override is.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded .env from: {}", path.display()),
            Err(e) => debug!("No .env loaded: {e}"),
        }

        match std::env::var(API_URL_ENV_VAR) {
            Ok(url) => {
                info!("API base URL overridden by {API_URL_ENV_VAR}");
                self.api.base_url = url;
            }
            Err(VarError::NotPresent) => {}
            Err(e @ VarError::NotUnicode(_)) => {
                return Err(ConfigError::EnvironmentError {
                    location: ErrorLocation::from(Location::caller()),
                    variable: API_URL_ENV_VAR,
                    reason: e.to_string(),
                });
            }
        }

        self.validate()
    }

    /// Path of the credential file inside `config_dir`.
    pub fn credentials_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.storage.credentials_file)
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        let url = &self.api.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid URL format: {}", url),
            });
        }

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.api.timeout_secs) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid timeout: {}s (must be {}-{})",
                    self.api.timeout_secs, MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS
                ),
            });
        }

        if self.session.access_token_key.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "access_token_key cannot be empty".to_string(),
            });
        }

        if !self.session.sign_in_route.starts_with('/') {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "sign_in_route must be absolute: {}",
                    self.session.sign_in_route
                ),
            });
        }

        if self.storage.credentials_file.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "credentials_file cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
