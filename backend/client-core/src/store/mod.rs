//! Application state container.
//!
//! A single [`AppState`] tree split into feature slices, mutated only by
//! dispatching [`Action`]s. Each slice owns a pure `apply` reducer.
//!
//! # Architecture
//!
//! - Writes take the lock, apply the action and bump a version counter
//! - Reads clone a snapshot or project through a selector closure
//! - Observers watch the version counter and re-select on change

pub mod action;
pub mod core_state;

pub use action::Action;
pub use core_state::{CoreAction, CoreState, ServerError};

use crate::capabilities::Dispatcher;
use crate::coupon::{BriefState, ReferralState};
use crate::delivery_addresses::DeliveryAddressesState;
use crate::notifications::NotificationsState;

use std::sync::{Arc, PoisonError, RwLock};

use log::debug;
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub core: CoreState,
    pub notifications: NotificationsState,
    pub referral: ReferralState,
    pub brief: BriefState,
    pub delivery_addresses: DeliveryAddressesState,
}

impl AppState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Core(action) => self.core.apply(action),
            Action::Notifications(action) => self.notifications.apply(action),
            Action::Referral(action) => self.referral.apply(action),
            Action::Brief(action) => self.brief.apply(action),
            Action::DeliveryAddresses(action) => self.delivery_addresses.apply(action),
        }
    }
}

/// Shared store handle.
///
/// # Thread Safety
///
/// This type is `Clone`; all clones share the same state and version channel.
#[derive(Clone)]
pub struct AppStore {
    state: Arc<RwLock<AppState>>,
    version: Arc<watch::Sender<u64>>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        let (version, _) = watch::channel(0);
        Self {
            state: Arc::new(RwLock::new(state)),
            version: Arc::new(version),
        }
    }

    /// Snapshot of the whole tree.
    pub fn state(&self) -> AppState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Project part of the state without cloning the rest.
    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        selector(&state)
    }

    /// Receiver notified after every dispatched action.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher for AppStore {
    fn dispatch(&self, action: Action) {
        debug!("Dispatching {}", action.kind());
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.apply(action);
        }
        self.version.send_modify(|version| *version += 1);
    }
}
