//! Scene platform — one selector and one trigger per device.
//!
//! The platform owns the account's [`SelectionStore`] and hands it to every
//! entity it creates, so a device's trigger sees what its selector stored.

use std::collections::BTreeMap;
use std::sync::Arc;

use scenehub_domain::credentials::UserCredentials;
use scenehub_domain::device::Device;
use scenehub_domain::entity::Entity;
use scenehub_domain::error::{NotFoundError, SceneHubError, ValidationError};
use scenehub_domain::event::{Event, EventType};

use crate::coordinator::SceneCoordinator;
use crate::ports::{DiscoveredDevice, EventPublisher, Integration, SceneCloud};
use crate::selection_store::SelectionStore;
use crate::services::scene_select::SceneSelect;
use crate::services::scene_trigger::SceneTrigger;

/// Service accepted by scene selectors; data `{"option": "<scene name>"}`.
pub const SELECT_OPTION: &str = "select_option";

/// Service accepted by scene triggers; no data.
pub const PRESS: &str = "press";

/// Suffix of the selector's unique id, after the device slug.
pub const SELECTED_SCENE_SUFFIX: &str = "selected_scene";

/// Suffix of the trigger's unique id, after the device slug.
pub const TRIGGER_SCENE_SUFFIX: &str = "trigger_scene";

/// An entity registered by the platform.
pub enum SceneEntity<C, P> {
    Select(Arc<SceneSelect<C, P>>),
    Trigger(Arc<SceneTrigger<C, P>>),
}

impl<C, P> SceneEntity<C, P>
where
    C: SceneCloud,
    P: EventPublisher,
{
    #[must_use]
    pub fn snapshot(&self) -> Entity {
        match self {
            Self::Select(select) => select.snapshot(),
            Self::Trigger(trigger) => trigger.snapshot(),
        }
    }
}

/// Scene entities for every device of one cloud account.
pub struct ScenePlatform<C, P> {
    devices: Vec<Device>,
    credentials: UserCredentials,
    cloud: Arc<C>,
    publisher: Arc<P>,
    selections: SelectionStore,
    entities: BTreeMap<String, SceneEntity<C, P>>,
}

impl<C, P> ScenePlatform<C, P>
where
    C: SceneCloud,
    P: EventPublisher,
{
    /// Create a platform for `devices`; nothing is fetched until [`setup`](Integration::setup).
    pub fn new(
        devices: Vec<Device>,
        credentials: UserCredentials,
        cloud: Arc<C>,
        publisher: Arc<P>,
        selections: SelectionStore,
    ) -> Self {
        Self {
            devices,
            credentials,
            cloud,
            publisher,
            selections,
            entities: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn selections(&self) -> &SelectionStore {
        &self.selections
    }

    fn build_entities(
        &self,
        device: &Device,
    ) -> Result<(SceneSelect<C, P>, SceneTrigger<C, P>), SceneHubError> {
        let coordinator = Arc::new(SceneCoordinator::new(
            device.clone(),
            self.credentials.clone(),
            Arc::clone(&self.cloud),
            self.selections.clone(),
        ));
        let slug = device.slug();

        let select = SceneSelect::new(
            format!("{slug}_{SELECTED_SCENE_SUFFIX}"),
            Arc::clone(&coordinator),
            Arc::clone(&self.publisher),
        )?;
        let trigger = SceneTrigger::new(
            format!("{slug}_{TRIGGER_SCENE_SUFFIX}"),
            coordinator,
            Arc::clone(&self.publisher),
        )?;
        Ok((select, trigger))
    }

    async fn register(&mut self, entity: SceneEntity<C, P>) -> Result<Entity, SceneHubError> {
        let snapshot = entity.snapshot();
        self.publisher
            .publish(Event::new(
                EventType::EntityCreated,
                Some(snapshot.id),
                serde_json::json!({ "entity_id": snapshot.entity_id }),
            ))
            .await?;
        self.entities.insert(snapshot.entity_id.clone(), entity);
        Ok(snapshot)
    }
}

impl<C, P> Integration for ScenePlatform<C, P>
where
    C: SceneCloud + 'static,
    P: EventPublisher + 'static,
{
    fn name(&self) -> &'static str {
        "roborock_scenes"
    }

    /// Build and attach the entities of every device.
    ///
    /// A selector whose scene list cannot be fetched is left out; the
    /// device's trigger is registered regardless and will no-op until a
    /// selection exists.
    async fn setup(&mut self) -> Result<Vec<DiscoveredDevice>, SceneHubError> {
        let mut discovered = Vec::new();

        for device in self.devices.clone() {
            let (select, trigger) = self.build_entities(&device)?;

            if self.entities.contains_key(&select.entity_id())
                || self.entities.contains_key(&trigger.entity_id())
            {
                tracing::warn!(
                    device = %device.name,
                    duid = %device.duid,
                    "another device already uses this name, skipping"
                );
                continue;
            }

            let mut entities = Vec::with_capacity(2);
            match select.attach().await {
                Ok(()) => {
                    entities.push(self.register(SceneEntity::Select(Arc::new(select))).await?);
                }
                Err(err) => {
                    tracing::error!(
                        device = %device.name,
                        duid = %device.duid,
                        error = ?err,
                        "failed to load scenes, scene selector not added"
                    );
                }
            }
            entities.push(
                self.register(SceneEntity::Trigger(Arc::new(trigger)))
                    .await?,
            );

            tracing::info!(device = %device.name, entities = entities.len(), "device set up");
            discovered.push(DiscoveredDevice { device, entities });
        }

        Ok(discovered)
    }

    fn entities(&self) -> Vec<Entity> {
        self.entities.values().map(SceneEntity::snapshot).collect()
    }

    fn entity(&self, entity_id: &str) -> Option<Entity> {
        self.entities.get(entity_id).map(SceneEntity::snapshot)
    }

    async fn handle_service_call(
        &self,
        entity_id: &str,
        service: &str,
        data: serde_json::Value,
    ) -> Result<Entity, SceneHubError> {
        let entity = self.entities.get(entity_id).ok_or_else(|| NotFoundError {
            entity: "Entity",
            id: entity_id.to_string(),
        })?;

        match (entity, service) {
            (SceneEntity::Select(select), SELECT_OPTION) => {
                let option = data
                    .get("option")
                    .and_then(serde_json::Value::as_str)
                    .ok_or(ValidationError::MissingField("option"))?;
                select.select_option(option).await?;
                Ok(select.snapshot())
            }
            (SceneEntity::Trigger(trigger), PRESS) => {
                trigger.press().await?;
                Ok(trigger.snapshot())
            }
            _ => Err(ValidationError::UnsupportedService {
                entity_id: entity_id.to_string(),
                service: service.to_string(),
            }
            .into()),
        }
    }

    async fn teardown(&mut self) -> Result<(), SceneHubError> {
        tracing::debug!(entities = self.entities.len(), "tearing down scene platform");
        self.entities.clear();
        Ok(())
    }
}
