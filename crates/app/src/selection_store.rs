//! Per-device scene selection, shared by the selectors and triggers of one account.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Maps a device's cloud id to the name of the scene last selected for it.
///
/// One store is created per configured account and handed to every
/// selector and trigger it serves; clones share the same map. Nothing is
/// persisted: the map lives as long as its last handle.
///
/// Each read or write is atomic, but nothing serialises a selection
/// against a concurrent trigger press.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    selections: Arc<Mutex<HashMap<String, String>>>,
}

impl SelectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected scene name for `duid`, or `None` if nothing was selected yet.
    #[must_use]
    pub fn get(&self, duid: &str) -> Option<String> {
        self.lock().get(duid).cloned()
    }

    /// Record `name` as the selection for `duid`. `None` clears it.
    pub fn set(&self, duid: &str, name: Option<String>) {
        let mut selections = self.lock();
        match name {
            Some(name) => {
                selections.insert(duid.to_string(), name);
            }
            None => {
                selections.remove(duid);
            }
        }
    }

    /// Copy of the whole map.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.selections.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
