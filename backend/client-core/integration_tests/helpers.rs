//! Test helpers for API client integration tests.
//!
//! Wires a real [`ApiClient`] against a wiremock server with in-memory
//! capabilities, so tests can assert on every side effect of a call:
//! - Notifications (drained from the channel)
//! - Store state
//! - Stored credentials
//! - Navigation history

use client_core::ACCESS_TOKEN_STORAGE_KEY;
use client_core::api_client::ApiClient;
use client_core::capabilities::{
    ChannelNotifier, CredentialStorage, MemoryCredentialStorage, RouteHistory,
};
use client_core::interceptor::ResponseClassifier;
use client_core::store::AppStore;

use models::NotificationEvent;

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;
use wiremock::MockServer;

pub const TEST_ACCESS_TOKEN: &str = "test-token-12345";
pub const START_ROUTE: &str = "/dashboard";

pub struct Harness {
    pub server: MockServer,
    pub client: ApiClient,
    pub store: AppStore,
    pub credentials: MemoryCredentialStorage,
    pub history: RouteHistory,
    notifications: UnboundedReceiver<NotificationEvent>,
}

impl Harness {
    /// Mock server plus a signed-in client pointing at it.
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let store = AppStore::new();
        let credentials = MemoryCredentialStorage::new();
        credentials
            .set_item(ACCESS_TOKEN_STORAGE_KEY, TEST_ACCESS_TOKEN)
            .expect("memory storage never fails");
        let history = RouteHistory::new(START_ROUTE);
        let (notifier, notifications) = ChannelNotifier::new();

        let classifier = ResponseClassifier::new(
            Arc::new(store.clone()),
            Arc::new(notifier),
            Arc::new(history.clone()),
            Arc::new(credentials.clone()),
        );
        let client = ApiClient::new(
            &format!("{}/api/v1", server.uri()),
            classifier,
            Arc::new(credentials.clone()),
        )
        .expect("Failed to build client");

        Self {
            server,
            client,
            store,
            credentials,
            history,
            notifications,
        }
    }

    /// Every notification emitted since the last drain.
    pub fn drain_notifications(&mut self) -> Vec<NotificationEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.notifications.try_recv() {
            events.push(event);
        }
        events
    }
}
