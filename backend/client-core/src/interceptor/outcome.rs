use common::HttpStatusCode;

use std::collections::HashSet;
use std::fmt;

use log::warn;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

/// Per-call switches that change how a failed exchange is handled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Suppress session and global-error handling for this call.
    pub skip_error: bool,
    /// Failure statuses this call expects and handles itself.
    pub statuses_no_errors: HashSet<u16>,
}

impl RequestOptions {
    pub fn skip_error() -> Self {
        Self {
            skip_error: true,
            ..Self::default()
        }
    }

    pub fn expecting(statuses: impl IntoIterator<Item = u16>) -> Self {
        Self {
            skip_error: false,
            statuses_no_errors: statuses.into_iter().collect(),
        }
    }

    pub fn expects(&self, status: HttpStatusCode) -> bool {
        self.statuses_no_errors.contains(&status.0)
    }
}

/// A completed request/response cycle, success or failure.
#[derive(Debug, Clone)]
pub struct ExchangeOutcome {
    pub status: HttpStatusCode,
    /// Parsed JSON body. Non-JSON payloads are kept as a JSON string, empty
    /// payloads as `None`.
    pub body: Option<Value>,
    pub headers: HeaderMap,
    pub options: RequestOptions,
}

impl ExchangeOutcome {
    pub fn new(status: u16) -> Self {
        Self {
            status: HttpStatusCode(status),
            body: None,
            headers: HeaderMap::new(),
            options: RequestOptions::default(),
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Invalid header names or values are dropped with a warning.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => warn!("Ignoring invalid header {name}"),
        }
        self
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Read a `reqwest` response to completion.
    pub async fn from_response(
        response: reqwest::Response,
        options: RequestOptions,
    ) -> Result<Self, reqwest::Error> {
        let status = HttpStatusCode(response.status().as_u16());
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        Ok(Self {
            status,
            body: parse_body(&bytes),
            headers,
            options,
        })
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    /// JSON pointer into the body, e.g. `/data/message`.
    pub fn pointer(&self, path: &str) -> Option<&Value> {
        self.body.as_ref().and_then(|body| body.pointer(path))
    }
}

impl fmt::Display for ExchangeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status.reason_phrase() {
            Some(reason) => write!(f, "HTTP {} {}", self.status, reason),
            None => write!(f, "HTTP {}", self.status),
        }
    }
}

fn parse_body(bytes: &[u8]) -> Option<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(String::from_utf8_lossy(bytes).into_owned())),
    }
}
