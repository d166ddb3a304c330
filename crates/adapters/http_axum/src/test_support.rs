//! Stub integration shared by the handler tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use scenehub_app::event_bus::InProcessEventBus;
use scenehub_app::ports::{DiscoveredDevice, Integration};
use scenehub_domain::entity::{Entity, EntityKind, EntityState};
use scenehub_domain::error::{CloudError, NotFoundError, SceneHubError, ValidationError};

use crate::state::AppState;

/// One selector (`select.robo_selected_scene`, state `Mop`) and one
/// trigger (`button.robo_trigger_scene`). Pressing with `{"fail": true}`
/// simulates a cloud failure.
pub struct StubIntegration {
    entities: Mutex<BTreeMap<String, Entity>>,
}

impl StubIntegration {
    pub fn with_scene_entities() -> Self {
        let select = Entity::builder()
            .unique_id("robo_selected_scene")
            .friendly_name("Selected Scene")
            .kind(EntityKind::Select)
            .state(EntityState::Value("Mop".to_string()))
            .build()
            .unwrap();
        let trigger = Entity::builder()
            .unique_id("robo_trigger_scene")
            .friendly_name("Trigger Scene")
            .kind(EntityKind::Button)
            .build()
            .unwrap();
        let entities = [select, trigger]
            .into_iter()
            .map(|entity| (entity.entity_id.clone(), entity))
            .collect();
        Self {
            entities: Mutex::new(entities),
        }
    }
}

impl Integration for StubIntegration {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn setup(&mut self) -> Result<Vec<DiscoveredDevice>, SceneHubError> {
        Ok(Vec::new())
    }

    fn entities(&self) -> Vec<Entity> {
        self.entities.lock().unwrap().values().cloned().collect()
    }

    async fn handle_service_call(
        &self,
        entity_id: &str,
        service: &str,
        data: serde_json::Value,
    ) -> Result<Entity, SceneHubError> {
        let mut entities = self.entities.lock().unwrap();
        let entity = entities.get_mut(entity_id).ok_or_else(|| NotFoundError {
            entity: "Entity",
            id: entity_id.to_string(),
        })?;

        match (entity.kind, service) {
            (EntityKind::Select, "select_option") => {
                let option = data["option"]
                    .as_str()
                    .ok_or(ValidationError::MissingField("option"))?;
                entity.state = EntityState::Value(option.to_string());
            }
            (EntityKind::Button, "press") if data["fail"] == true => {
                return Err(CloudError::Status {
                    status: 503,
                    body: "device offline".to_string(),
                }
                .into());
            }
            (EntityKind::Button, "press") => {}
            _ => {
                return Err(ValidationError::UnsupportedService {
                    entity_id: entity_id.to_string(),
                    service: service.to_string(),
                }
                .into());
            }
        }
        Ok(entity.clone())
    }

    async fn teardown(&mut self) -> Result<(), SceneHubError> {
        Ok(())
    }
}

pub fn test_state() -> (AppState<StubIntegration>, InProcessEventBus) {
    let event_bus = InProcessEventBus::new(16);
    let state = AppState::from_arc(Arc::new(StubIntegration::with_scene_entities()), event_bus.clone());
    (state, event_bus)
}
