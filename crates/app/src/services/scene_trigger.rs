//! Scene trigger — runs the scene currently selected for a device.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use scenehub_domain::entity::{Entity, EntityKind, EntityState};
use scenehub_domain::error::SceneHubError;
use scenehub_domain::event::{Event, EventType};
use scenehub_domain::scene::{self, NameMatch, SceneId};
use scenehub_domain::time::{now, to_state_string};

use crate::coordinator::SceneCoordinator;
use crate::ports::{EventPublisher, SceneCloud};

/// Friendly name of every scene trigger.
pub const TRIGGER_NAME: &str = "Trigger Scene";

/// A button entity that executes the device's selected scene.
///
/// The selection is looked up by name in a freshly fetched scene list at
/// press time, so a renamed or deleted scene simply stops matching.
pub struct SceneTrigger<C, P> {
    coordinator: Arc<SceneCoordinator<C>>,
    publisher: Arc<P>,
    entity: Mutex<Entity>,
}

impl<C, P> SceneTrigger<C, P>
where
    C: SceneCloud,
    P: EventPublisher,
{
    /// Create a trigger that has never been pressed.
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
            .friendly_name(TRIGGER_NAME)
            .kind(EntityKind::Button)
            .build()?;

        Ok(Self {
            coordinator,
            publisher,
            entity: Mutex::new(entity),
        })
    }

    /// Execute the selected scene.
    ///
    /// Pressing with nothing selected, or with a name no fetched scene
    /// carries, logs a warning and does nothing. A failure while fetching
    /// scenes is logged and treated the same way. When several scenes share
    /// the selected name the first one in cloud order runs.
    ///
    /// # Errors
    ///
    /// Returns the cloud's error, unchanged, when the execute call fails.
    #[tracing::instrument(skip(self), fields(device = %self.coordinator.device().name))]
    pub async fn press(&self) -> Result<(), SceneHubError> {
        self.record_press().await?;

        let Some(scene_name) = self
            .coordinator
            .selected_scene()
            .filter(|name| !name.is_empty())
        else {
            tracing::warn!("no scene selected to execute");
            return Ok(());
        };

        let Some(scene_id) = self.resolve(&scene_name).await else {
            tracing::warn!(scene = %scene_name, "selected scene not found, nothing to execute");
            return Ok(());
        };

        if let Err(err) = self.coordinator.execute_scene(scene_id).await {
            tracing::error!(
                scene = %scene_name,
                %scene_id,
                duid = %self.coordinator.device().duid,
                error = ?err,
                "error executing scene"
            );
            return Err(err);
        }
        tracing::info!(scene = %scene_name, %scene_id, "executed scene");

        let event = Event::new(
            EventType::SceneExecuted,
            Some(self.lock().id),
            serde_json::json!({
                "duid": self.coordinator.device().duid,
                "scene": scene_name,
                "scene_id": scene_id,
            }),
        );
        self.publisher.publish(event).await
    }

    #[must_use]
    pub fn entity_id(&self) -> String {
        self.lock().entity_id.clone()
    }

    /// Current entity snapshot; the state is the time of the last press.
    #[must_use]
    pub fn snapshot(&self) -> Entity {
        self.lock().clone()
    }

    async fn resolve(&self, scene_name: &str) -> Option<SceneId> {
        let scenes = match self.coordinator.fetch_scenes().await {
            Ok(scenes) => scenes,
            Err(err) => {
                tracing::error!(error = %err, "error fetching scenes before execution");
                return None;
            }
        };

        match scene::find_by_name(&scenes, scene_name) {
            NameMatch::Missing => None,
            NameMatch::Unique(found) => Some(found.id),
            NameMatch::Ambiguous { first, count } => {
                tracing::warn!(
                    scene = %scene_name,
                    count,
                    scene_id = %first.id,
                    "several scenes share the selected name, using the first"
                );
                Some(first.id)
            }
        }
    }

    async fn record_press(&self) -> Result<(), SceneHubError> {
        let entity = {
            let mut entity = self.lock();
            let ts = now();
            entity.update_state(EntityState::Value(to_state_string(ts)), ts);
            entity.clone()
        };

        let event = Event::new(
            EventType::StateChanged,
            Some(entity.id),
            serde_json::json!({
                "entity_id": entity.entity_id,
                "state": entity.state,
            }),
        );
        self.publisher.publish(event).await
    }

    fn lock(&self) -> MutexGuard<'_, Entity> {
        self.entity.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
