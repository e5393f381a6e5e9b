use crate::capabilities::CredentialStorage;
use crate::capabilities::storage::load_access_token;
use crate::config::AppConfig;
use crate::error::ApiClientError;
use crate::interceptor::message::{is_present, render};
use crate::interceptor::{ExchangeOutcome, RequestOptions, ResponseClassifier};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

pub const TIMEOUT_MESSAGE: &str = "The server took too long to respond. Please try again.";

/// HTTP client for the storefront API.
///
/// Every response, success or failure, goes through the
/// [`ResponseClassifier`] before the caller sees it.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
    classifier: ResponseClassifier,
    credentials: Arc<dyn CredentialStorage>,
}

impl ApiClient {
    pub fn new(
        base_url_str: &str,
        classifier: ResponseClassifier,
        credentials: Arc<dyn CredentialStorage>,
    ) -> Result<Self, ApiClientError> {
        Self::with_timeout(base_url_str, DEFAULT_TIMEOUT_DURATION, classifier, credentials)
    }

    pub fn from_config(
        config: &AppConfig,
        classifier: ResponseClassifier,
        credentials: Arc<dyn CredentialStorage>,
    ) -> Result<Self, ApiClientError> {
        Self::with_timeout(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
            classifier,
            credentials,
        )
    }

    fn with_timeout(
        base_url_str: &str,
        timeout: Duration,
        classifier: ResponseClassifier,
        credentials: Arc<dyn CredentialStorage>,
    ) -> Result<Self, ApiClientError> {
        // Url::join drops the last path segment unless it ends with '/'.
        let base_url = if base_url_str.ends_with('/') {
            Url::parse(base_url_str)?
        } else {
            Url::parse(&format!("{base_url_str}/"))?
        };

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            client,
            classifier,
            credentials,
        })
    }

    pub fn classifier(&self) -> &ResponseClassifier {
        &self.classifier
    }

    fn prepare_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let key = &self.classifier.session().access_token_key;
        match load_access_token(self.credentials.as_ref(), key) {
            Ok(Some(token)) => request.header(AUTHORIZATION, token.bearer()),
            Ok(None) => request,
            Err(e) => {
                warn!("Sending request without credentials: {e}");
                request
            }
        }
    }

    /// Send one request and classify its outcome.
    ///
    /// # Errors
    ///
    /// - [`ApiClientError::Http`] when no response arrived (transport failure)
    /// - [`ApiClientError::Rejected`] when the classifier propagates the failure
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        options: RequestOptions,
    ) -> Result<ExchangeOutcome, ApiClientError> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;
        debug!("{method} {url}");

        let mut request = self.prepare_request(self.client.request(method, url));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let outcome = ExchangeOutcome::from_response(response, options).await?;

        self.classifier.intercept(outcome)
    }

    pub async fn get(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ExchangeOutcome, ApiClientError> {
        self.execute(Method::GET, path, None, options).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: &Value,
        options: RequestOptions,
    ) -> Result<ExchangeOutcome, ApiClientError> {
        self.execute(Method::POST, path, Some(body), options).await
    }

    pub async fn patch(
        &self,
        path: &str,
        body: &Value,
        options: RequestOptions,
    ) -> Result<ExchangeOutcome, ApiClientError> {
        self.execute(Method::PATCH, path, Some(body), options).await
    }

    pub async fn delete(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ExchangeOutcome, ApiClientError> {
        self.execute(Method::DELETE, path, None, options).await
    }
}

/// Deserialize the value at `pointer` in a successful outcome.
///
/// # Errors
///
/// Returns [`ApiClientError::UnexpectedPayload`] when the pointer is missing
/// (for example on a resolved residual error) and [`ApiClientError::Json`]
/// when the value has the wrong shape.
pub fn extract<T: DeserializeOwned>(
    outcome: &ExchangeOutcome,
    pointer: &str,
) -> Result<T, ApiClientError> {
    let value = outcome.pointer(pointer).ok_or_else(|| {
        ApiClientError::unexpected_payload(format!("{outcome}: missing {pointer}"))
    })?;

    Ok(serde_json::from_value(value.clone())?)
}

/// User-facing message for a failed call.
///
/// Prefers `error.message`, then `message` from the response body, then the
/// error's own description. Timeouts get a fixed retry hint.
pub fn get_response_error_message(error: &ApiClientError) -> String {
    if error.is_timeout() {
        return TIMEOUT_MESSAGE.to_string();
    }

    error
        .outcome()
        .and_then(|outcome| {
            ["/error/message", "/message"]
                .into_iter()
                .filter_map(|pointer| outcome.pointer(pointer))
                .find(|value| is_present(value))
                .map(render)
        })
        .unwrap_or_else(|| match error.outcome() {
            Some(outcome) => outcome.to_string(),
            None => error.to_string(),
        })
}
