//! Event bus port — publish/subscribe for domain events.

use std::future::Future;

use scenehub_domain::error::SceneHubError;
use scenehub_domain::event::Event;

/// Publishes domain events to interested subscribers.
pub trait EventPublisher: Send + Sync {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), SceneHubError>> + Send;
}

impl<T: EventPublisher> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), SceneHubError>> + Send {
        (**self).publish(event)
    }
}
