// Test doubles shared by the unit tests.

use crate::capabilities::{CredentialStorage, Dispatcher, Navigator, Notifier};
use crate::error::StorageError;
use crate::interceptor::ResponseClassifier;
use crate::store::Action;

use common::ErrorLocation;
use models::NotificationEvent;

use std::io::{Error as IoError, ErrorKind};
use std::panic::Location;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// One observed side effect, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Notified(NotificationEvent),
    Dispatched(Action),
    Redirected(String),
    Removed(String),
}

/// Fake for every classifier capability, recording into one shared log so
/// tests can assert on ordering across capabilities.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<Recorded>>>,
    fail_storage: bool,
}

impl Recorder {
    pub fn failing_storage() -> Self {
        Self {
            fail_storage: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<Recorded> {
        self.events.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<NotificationEvent> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Recorded::Notified(notification) => Some(notification),
                _ => None,
            })
            .collect()
    }

    pub fn dispatched(&self) -> Vec<Action> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Recorded::Dispatched(action) => Some(action),
                _ => None,
            })
            .collect()
    }

    pub fn classifier(&self) -> ResponseClassifier {
        let shared = Arc::new(self.clone());
        ResponseClassifier::new(shared.clone(), shared.clone(), shared.clone(), shared)
    }

    fn record(&self, event: Recorded) {
        self.events.lock().unwrap().push(event);
    }
}

impl Notifier for Recorder {
    fn notify(&self, event: NotificationEvent) {
        self.record(Recorded::Notified(event));
    }
}

impl Dispatcher for Recorder {
    fn dispatch(&self, action: Action) {
        self.record(Recorded::Dispatched(action));
    }
}

impl Navigator for Recorder {
    fn redirect(&self, route: &str) {
        self.record(Recorded::Redirected(route.to_string()));
    }
}

impl CredentialStorage for Recorder {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_storage {
            return Err(StorageError::WriteError {
                location: ErrorLocation::from(Location::caller()),
                path: PathBuf::from("storage.json"),
                source: IoError::new(ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.record(Recorded::Removed(key.to_string()));
        Ok(())
    }
}
