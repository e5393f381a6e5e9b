use crate::interceptor::{ExchangeOutcome, OutcomeCategory};

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApiClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// The classifier handled the failure and passed it back to the caller.
    #[error("Rejected Error: HTTP {status} ({category}) {location}")]
    Rejected {
        status: HttpStatusCode,
        category: OutcomeCategory,
        outcome: Box<ExchangeOutcome>,
        location: ErrorLocation,
    },

    #[error("Unexpected Payload Error: {message} {location}")]
    UnexpectedPayload {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiClientError {
    #[track_caller]
    pub fn rejected(category: OutcomeCategory, outcome: ExchangeOutcome) -> Self {
        ApiClientError::Rejected {
            status: outcome.status,
            category,
            outcome: Box::new(outcome),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected_payload(message: impl Into<String>) -> Self {
        ApiClientError::UnexpectedPayload {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Outcome of a rejected exchange, if the server answered at all.
    pub fn outcome(&self) -> Option<&ExchangeOutcome> {
        match self {
            ApiClientError::Rejected { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    /// The request was sent but no response arrived within the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiClientError::Http { is_timeout: true, .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiClientError::Rejected { status, .. } => Some(status.0),
            _ => None,
        }
    }

    pub fn category(&self) -> Option<OutcomeCategory> {
        match self {
            ApiClientError::Rejected { category, .. } => Some(*category),
            _ => None,
        }
    }
}

impl From<url::ParseError> for ApiClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ApiClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ApiClientError::Http {
            is_timeout: error.is_timeout(),
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ApiClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ApiClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
