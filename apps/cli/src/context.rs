use crate::error::CliError;

use client_core::api_client::ApiClient;
use client_core::capabilities::storage::load_access_token;
use client_core::capabilities::{Dispatcher, FileCredentialStorage, LogNotifier, RouteHistory};
use client_core::config::AppConfig;
use client_core::interceptor::{ResponseClassifier, SessionSettings};
use client_core::store::{AppStore, CoreAction};

use std::path::Path;
use std::sync::Arc;

use log::debug;

/// Route the CLI starts on. Only a redirect away from it means anything.
pub const HOME_ROUTE: &str = "/";

/// Everything a command needs, wired once per invocation.
pub struct CliContext {
    pub config: AppConfig,
    pub store: AppStore,
    pub credentials: FileCredentialStorage,
    pub history: RouteHistory,
    pub client: ApiClient,
}

impl CliContext {
    pub fn new(config: AppConfig, config_dir: &Path) -> Result<Self, CliError> {
        let credentials = FileCredentialStorage::new(config.credentials_path(config_dir));
        let store = AppStore::new();
        let history = RouteHistory::new(HOME_ROUTE);

        let classifier = ResponseClassifier::new(
            Arc::new(store.clone()),
            Arc::new(LogNotifier),
            Arc::new(history.clone()),
            Arc::new(credentials.clone()),
        )
        .with_session(SessionSettings::from(&config.session));

        let client = ApiClient::from_config(&config, classifier, Arc::new(credentials.clone()))?;

        if load_access_token(&credentials, &config.session.access_token_key)?.is_some() {
            debug!("Stored access token found");
            store.dispatch(CoreAction::LoginSuccess.into());
        }

        Ok(Self {
            config,
            store,
            credentials,
            history,
            client,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.select(|state| state.core.is_authenticated)
    }

    /// True once the classifier has sent the user to the sign-in route.
    pub fn session_expired(&self) -> bool {
        self.history.current().as_deref() == Some(self.config.session.sign_in_route.as_str())
    }

    pub fn require_session(&self) -> Result<(), CliError> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(CliError::cli("Not signed in. Run `storefront login <token>` first."))
        }
    }
}
