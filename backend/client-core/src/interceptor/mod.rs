//! Response outcome classification.
//!
//! Every exchange made through [`crate::api_client::ApiClient`] passes
//! through [`ResponseClassifier`] once it completes. The classifier turns the
//! outcome into user notifications, session teardown or a stored global
//! error, and decides whether the caller sees the failure.
//!
//! Failure handling, first matching rule wins:
//!
//! 1. `>= 500`: error notification with the status code, propagate.
//! 2. Baseline error notification with `error.message`.
//! 3. `skip_error`: propagate.
//! 4. Status listed in `statuses_no_errors`: propagate.
//! 5. 401/403: clear the access token, log out, redirect to sign-in, propagate.
//! 6. `<= 300`: propagate.
//! 7. Otherwise store a global error and resolve with the outcome.

pub mod message;
pub mod outcome;

pub use outcome::{ExchangeOutcome, RequestOptions};

use crate::capabilities::{CredentialStorage, Dispatcher, Navigator, Notifier};
use crate::error::ApiClientError;
use crate::store::CoreAction;
use crate::{ACCESS_TOKEN_STORAGE_KEY, SIGN_IN_ROUTE};

use models::notification_event::SERVER_FAULT_DESCRIPTION;
use models::{ErrorFormat, NotificationEvent};

use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};

/// How a failed exchange was categorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeCategory {
    ServerFault,
    Suppressed,
    AuthExpired,
    BenignRedirect,
    HandledResidual,
}

impl OutcomeCategory {
    /// Only residual errors are swallowed; the caller receives the outcome.
    pub fn resolves(&self) -> bool {
        matches!(self, OutcomeCategory::HandledResidual)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeCategory::ServerFault => "server_fault",
            OutcomeCategory::Suppressed => "suppressed",
            OutcomeCategory::AuthExpired => "auth_expired",
            OutcomeCategory::BenignRedirect => "benign_redirect",
            OutcomeCategory::HandledResidual => "handled_residual",
        }
    }
}

impl fmt::Display for OutcomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where session teardown writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub access_token_key: String,
    pub sign_in_route: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            access_token_key: ACCESS_TOKEN_STORAGE_KEY.to_string(),
            sign_in_route: SIGN_IN_ROUTE.to_string(),
        }
    }
}

/// Post-processing stage for completed exchanges.
///
/// Capabilities are injected once at construction. The classifier itself
/// holds no mutable state, so clones can be shared freely.
#[derive(Clone)]
pub struct ResponseClassifier {
    dispatcher: Arc<dyn Dispatcher>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    credentials: Arc<dyn CredentialStorage>,
    session: SessionSettings,
}

impl ResponseClassifier {
    pub fn new(
        dispatcher: Arc<dyn Dispatcher>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        credentials: Arc<dyn CredentialStorage>,
    ) -> Self {
        Self {
            dispatcher,
            notifier,
            navigator,
            credentials,
            session: SessionSettings::default(),
        }
    }

    pub fn with_session(mut self, session: SessionSettings) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &SessionSettings {
        &self.session
    }

    /// Route an outcome to the success or failure path.
    ///
    /// Returns the outcome when the caller should continue, or
    /// [`ApiClientError::Rejected`] carrying it when the failure propagates.
    pub fn intercept(&self, outcome: ExchangeOutcome) -> Result<ExchangeOutcome, ApiClientError> {
        if outcome.is_success() {
            self.on_success(&outcome);
            return Ok(outcome);
        }

        let category = self.on_failure(&outcome);
        if category.resolves() {
            Ok(outcome)
        } else {
            Err(ApiClientError::rejected(category, outcome))
        }
    }

    /// Success path: surface `data.message` when the API sent one.
    pub fn on_success(&self, outcome: &ExchangeOutcome) {
        if let Some(message) = message::success_message(outcome) {
            self.notifier.notify(NotificationEvent::success(message));
        }
    }

    /// Failure path. Performs every side effect and returns the category;
    /// the caller decides what to hand back based on
    /// [`OutcomeCategory::resolves`].
    pub fn on_failure(&self, outcome: &ExchangeOutcome) -> OutcomeCategory {
        let status = outcome.status;

        if status.is_server_fault() {
            self.notifier.notify(
                NotificationEvent::error(status.to_string())
                    .with_description(SERVER_FAULT_DESCRIPTION),
            );
            warn!("Server fault: {outcome}");
            return OutcomeCategory::ServerFault;
        }

        self.notifier
            .notify(NotificationEvent::error(message::baseline_error_message(outcome)));

        if outcome.options.skip_error {
            debug!("Error handling skipped for {outcome}");
            return OutcomeCategory::Suppressed;
        }

        if outcome.options.expects(status) {
            debug!("Expected status for {outcome}");
            return OutcomeCategory::Suppressed;
        }

        if status.is_auth_failure() {
            self.terminate_session();
            return OutcomeCategory::AuthExpired;
        }

        if status.is_within_redirect_boundary() {
            return OutcomeCategory::BenignRedirect;
        }

        let format = ErrorFormat::from_content_type(outcome.content_type());
        let message = message::residual_error_message(outcome);
        warn!("Storing {format} server error for {outcome}");
        self.dispatcher
            .dispatch(CoreAction::SetServerError { message, format }.into());

        OutcomeCategory::HandledResidual
    }

    fn terminate_session(&self) {
        // A failed removal must not stop the logout itself.
        if let Err(e) = self.credentials.remove_item(&self.session.access_token_key) {
            warn!("Failed to clear access token: {e}");
        }

        self.dispatcher.dispatch(CoreAction::LogoutSuccess.into());
        self.navigator.redirect(&self.session.sign_in_route);
        info!("Session expired, redirected to {}", self.session.sign_in_route);
    }
}
