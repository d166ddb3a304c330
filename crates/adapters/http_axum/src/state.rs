//! Shared application state for axum handlers.

use std::sync::Arc;

use scenehub_app::event_bus::InProcessEventBus;
use scenehub_app::ports::Integration;

/// Application state shared across all axum handlers.
///
/// Generic over the integration to avoid dynamic dispatch. `Clone` is
/// implemented manually so the integration itself does not need to be
/// `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<I> {
    /// Platform that owns the entities and handles service calls.
    pub integration: Arc<I>,
    /// Bus the SSE stream subscribes to.
    pub event_bus: InProcessEventBus,
}

impl<I> Clone for AppState<I> {
    fn clone(&self) -> Self {
        Self {
            integration: Arc::clone(&self.integration),
            event_bus: self.event_bus.clone(),
        }
    }
}

impl<I: Integration + 'static> AppState<I> {
    /// Create a new application state around an already set-up integration.
    pub fn new(integration: I, event_bus: InProcessEventBus) -> Self {
        Self::from_arc(Arc::new(integration), event_bus)
    }

    /// Create a new application state from a pre-wrapped integration.
    ///
    /// Use this when the integration is shared with other tasks.
    pub fn from_arc(integration: Arc<I>, event_bus: InProcessEventBus) -> Self {
        Self {
            integration,
            event_bus,
        }
    }
}
