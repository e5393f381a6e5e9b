use crate::capabilities::Navigator;

use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

/// In-memory navigation history. Clones share the same stack.
#[derive(Debug, Clone, Default)]
pub struct RouteHistory {
    entries: Arc<Mutex<Vec<String>>>,
}

impl RouteHistory {
    pub fn new(initial_route: impl Into<String>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(vec![initial_route.into()])),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RouteHistory {
    fn redirect(&self, route: &str) {
        debug!("Navigating to {route}");
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route.to_string());
    }
}
