//! Injected collaborators of the response classifier and feature code.
//!
//! Each capability is a narrow trait so tests can swap in fakes and the
//! binary can pick concrete implementations at startup.

pub mod navigation;
pub mod notifier;
pub mod storage;

pub use navigation::RouteHistory;
pub use notifier::{ChannelNotifier, LogNotifier};
pub use storage::{FileCredentialStorage, MemoryCredentialStorage};

use crate::error::StorageError;
use crate::store::Action;

use models::NotificationEvent;

/// Surface a transient message to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: NotificationEvent);
}

/// Apply a state transition to the application store. Fire-and-forget.
pub trait Dispatcher: Send + Sync {
    fn dispatch(&self, action: Action);
}

/// Move the user to another route.
pub trait Navigator: Send + Sync {
    fn redirect(&self, route: &str);
}

/// Persisted key/value storage for session credentials.
pub trait CredentialStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
