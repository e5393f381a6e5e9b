use client_core::error::{ApiClientError, ConfigError, StorageError};

use common::ErrorLocation;


use thiserror::Error;

/// Errors surfaced to the user by `storefront` commands.
///
/// Lower-level errors are flattened into a message here; their own
/// location is kept in the message, the conversion site in `location`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error from this app
    #[error("Cli Error: {message} {location}")]
    Cli {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core (HTTP, config, storage)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// User input the API or the form rejected
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn cli(message: impl Into<String>) -> Self {
        CliError::Cli {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn core(message: impl Into<String>) -> Self {
        CliError::Core {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::Validation {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// Message without the location suffix, for terminal output.
    pub fn message(&self) -> &str {
        match self {
            CliError::Cli { message, .. }
            | CliError::Core { message, .. }
            | CliError::Validation { message, .. } => message,
        }
    }
}

impl From<ApiClientError> for CliError {
    #[track_caller]
    fn from(error: ApiClientError) -> Self {
        CliError::Core {
            message: client_core::api_client::get_response_error_message(&error),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        CliError::Core {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<StorageError> for CliError {
    #[track_caller]
    fn from(error: StorageError) -> Self {
        CliError::Core {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        CliError::Cli {
            message: format!("Failed to render JSON: {error}"),
            location: ErrorLocation::caller(),
        }
    }
}
