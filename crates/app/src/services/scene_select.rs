//! Scene selector — lets a user pick one of a device's scenes by name.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use scenehub_domain::entity::{AttributeValue, Entity, EntityKind, EntityState};
use scenehub_domain::error::SceneHubError;
use scenehub_domain::event::{Event, EventType};
use scenehub_domain::scene::{self, Scene, SceneId};
use scenehub_domain::time::now;

use crate::coordinator::SceneCoordinator;
use crate::ports::{EventPublisher, SceneCloud};

/// Friendly name of every scene selector.
pub const SELECT_NAME: &str = "Selected Scene";

/// Attribute holding the selectable options.
pub const OPTIONS_ATTRIBUTE: &str = "options";

/// A select entity whose options are the names of one device's scenes.
///
/// The selection is written through to the account's
/// [`SelectionStore`](crate::selection_store::SelectionStore), where the
/// device's trigger reads it back.
pub struct SceneSelect<C, P> {
    coordinator: Arc<SceneCoordinator<C>>,
    publisher: Arc<P>,
    inner: Mutex<SelectState>,
}

struct SelectState {
    scenes: Vec<Scene>,
    options: Vec<String>,
    selected: Option<String>,
    entity: Entity,
}

impl<C, P> SceneSelect<C, P>
where
    C: SceneCloud,
    P: EventPublisher,
{
    /// Create a detached selector with no options.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `unique_id` is empty.
    pub fn new(
        unique_id: impl Into<String>,
        coordinator: Arc<SceneCoordinator<C>>,
        publisher: Arc<P>,
    ) -> Result<Self, SceneHubError> {
        let entity = Entity::builder()
            .device_id(coordinator.device().id)
            .unique_id(unique_id)
            .friendly_name(SELECT_NAME)
            .kind(EntityKind::Select)
            .attribute(OPTIONS_ATTRIBUTE, AttributeValue::List(Vec::new()))
            .build()?;

        Ok(Self {
            coordinator,
            publisher,
            inner: Mutex::new(SelectState {
                scenes: Vec::new(),
                options: Vec::new(),
                selected: None,
                entity,
            }),
        })
    }

    /// Load the device's scenes and default the selection to the first one.
    ///
    /// The default (or its absence, for a device without scenes) is
    /// recorded in the selection store.
    ///
    /// # Errors
    ///
    /// Cloud failures are returned unchanged; the selector stays detached.
    #[tracing::instrument(skip(self), fields(device = %self.coordinator.device().name))]
    pub async fn attach(&self) -> Result<(), SceneHubError> {
        let scenes = self.coordinator.fetch_scenes().await?;

        let selected = {
            let mut inner = self.lock();
            inner.options = scene::names(&scenes);
            if let Some(first) = scenes.first() {
                inner.selected = Some(first.name.clone());
            }
            inner.scenes = scenes;
            inner.selected.clone()
        };

        tracing::debug!(
            options = self.options().len(),
            selected = selected.as_deref().unwrap_or(""),
            "scene selector attached"
        );
        self.coordinator.record_selection(selected);
        self.write_state().await
    }

    /// Select `option`.
    ///
    /// The string is stored as given; it is not checked against the
    /// current options.
    ///
    /// # Errors
    ///
    /// Returns an error if the state change cannot be published.
    #[tracing::instrument(skip(self), fields(device = %self.coordinator.device().name))]
    pub async fn select_option(&self, option: &str) -> Result<(), SceneHubError> {
        self.lock().selected = Some(option.to_string());
        self.coordinator.record_selection(Some(option.to_string()));
        self.write_state().await
    }

    /// Scene names in cloud order, as of the last attach.
    #[must_use]
    pub fn options(&self) -> Vec<String> {
        self.lock().options.clone()
    }

    /// The selected scene name.
    #[must_use]
    pub fn current_option(&self) -> Option<String> {
        self.lock().selected.clone()
    }

    /// Id of the selected scene in the list fetched at attach time.
    #[must_use]
    pub fn selected_scene_id(&self) -> Option<SceneId> {
        let inner = self.lock();
        let selected = inner.selected.as_deref()?;
        scene::find_by_name(&inner.scenes, selected)
            .scene()
            .map(|scene| scene.id)
    }

    #[must_use]
    pub fn entity_id(&self) -> String {
        self.lock().entity.entity_id.clone()
    }

    /// Current entity snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Entity {
        self.lock().entity.clone()
    }

    async fn write_state(&self) -> Result<(), SceneHubError> {
        let entity = {
            let mut inner = self.lock();
            let options = AttributeValue::List(inner.options.clone());
            let state = EntityState::from_option(inner.selected.clone());
            inner
                .entity
                .attributes
                .insert(OPTIONS_ATTRIBUTE.to_string(), options);
            inner.entity.update_state(state, now());
            inner.entity.clone()
        };

        let event = Event::new(
            EventType::StateChanged,
            Some(entity.id),
            serde_json::json!({
                "entity_id": entity.entity_id,
                "state": entity.state,
                "attributes": entity.attributes,
            }),
        );
        self.publisher.publish(event).await
    }

    fn lock(&self) -> MutexGuard<'_, SelectState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
