//! Entity — a control the hub exposes for one device.
//!
//! Each device gets a scene **select** (choose a scene by name) and a scene
//! **button** (run the chosen scene). An [`Entity`] is the read-only
//! snapshot of such a control that the UI layer renders.

mod attribute_value;
mod state;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use attribute_value::AttributeValue;
pub use state::EntityState;

use crate::error::{SceneHubError, ValidationError};
use crate::id::{DeviceId, EntityId};
use crate::time::{Timestamp, now};

/// The kind of control, which decides the services an entity accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Pick one option out of a list (`select_option`).
    Select,
    /// Fire-and-forget action (`press`).
    Button,
}

impl EntityKind {
    /// Prefix used in the entity id, e.g. `select` in `select.robo_selected_scene`.
    #[must_use]
    pub fn domain(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Button => "button",
        }
    }

    /// Build the entity id for a unique id of this kind.
    #[must_use]
    pub fn entity_id(self, unique_id: &str) -> String {
        format!("{}.{unique_id}", self.domain())
    }
}

/// Snapshot of an entity's identity and current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub device_id: DeviceId,
    pub entity_id: String,
    pub unique_id: String,
    pub friendly_name: String,
    pub kind: EntityKind,
    pub state: EntityState,
    pub attributes: HashMap<String, AttributeValue>,
    pub last_changed: Timestamp,
    pub last_updated: Timestamp,
}

impl Entity {
    /// Create a builder for constructing an [`Entity`].
    #[must_use]
    pub fn builder() -> EntityBuilder {
        EntityBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SceneHubError::Validation`] when `entity_id` or
    /// `friendly_name` is empty.
    pub fn validate(&self) -> Result<(), SceneHubError> {
        if self.entity_id.is_empty() {
            return Err(ValidationError::EmptyEntityId.into());
        }
        if self.friendly_name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Set a new state. `last_changed` only moves when the value differs.
    pub fn update_state(&mut self, state: EntityState, ts: Timestamp) {
        if self.state != state {
            self.last_changed = ts;
        }
        self.state = state;
        self.last_updated = ts;
    }

    #[must_use]
    pub fn get_attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }
}

/// Step-by-step builder for [`Entity`].
#[derive(Debug, Default)]
pub struct EntityBuilder {
    device_id: Option<DeviceId>,
    unique_id: Option<String>,
    friendly_name: Option<String>,
    kind: Option<EntityKind>,
    state: EntityState,
    attributes: HashMap<String, AttributeValue>,
}

impl EntityBuilder {
    #[must_use]
    pub fn device_id(mut self, device_id: DeviceId) -> Self {
        self.device_id = Some(device_id);
        self
    }

    #[must_use]
    pub fn unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    #[must_use]
    pub fn friendly_name(mut self, name: impl Into<String>) -> Self {
        self.friendly_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: EntityKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn state(mut self, state: EntityState) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Consume the builder, validate, and return an [`Entity`].
    ///
    /// The entity id is derived from the kind and unique id; a missing kind
    /// or unique id leaves it empty and fails validation.
    ///
    /// # Errors
    ///
    /// Returns [`SceneHubError::Validation`] if the entity id or friendly
    /// name ends up empty.
    pub fn build(self) -> Result<Entity, SceneHubError> {
        let ts = now();
        let unique_id = self.unique_id.unwrap_or_default();
        let kind = self.kind.unwrap_or(EntityKind::Select);
        let entity_id = match (&self.kind, unique_id.is_empty()) {
            (Some(kind), false) => kind.entity_id(&unique_id),
            _ => String::new(),
        };
        let entity = Entity {
            id: EntityId::new(),
            device_id: self.device_id.unwrap_or_default(),
            entity_id,
            unique_id,
            friendly_name: self.friendly_name.unwrap_or_default(),
            kind,
            state: self.state,
            attributes: self.attributes,
            last_changed: ts,
            last_updated: ts,
        };
        entity.validate()?;
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select() -> Entity {
        Entity::builder()
            .unique_id("robo_selected_scene")
            .friendly_name("Selected Scene")
            .kind(EntityKind::Select)
            .build()
            .unwrap()
    }

    #[test]
    fn should_derive_entity_id_from_kind_and_unique_id() {
        let entity = select();
        assert_eq!(entity.entity_id, "select.robo_selected_scene");

        let button = Entity::builder()
            .unique_id("robo_trigger_scene")
            .friendly_name("Trigger Scene")
            .kind(EntityKind::Button)
            .build()
            .unwrap();
        assert_eq!(button.entity_id, "button.robo_trigger_scene");
    }

    #[test]
    fn should_reject_entity_without_kind() {
        let result = Entity::builder()
            .unique_id("robo_selected_scene")
            .friendly_name("Selected Scene")
            .build();
        assert!(matches!(
            result,
            Err(SceneHubError::Validation(ValidationError::EmptyEntityId))
        ));
    }

    #[test]
    fn should_reject_entity_without_friendly_name() {
        let result = Entity::builder()
            .unique_id("robo_selected_scene")
            .kind(EntityKind::Select)
            .build();
        assert!(matches!(
            result,
            Err(SceneHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_default_state_to_unknown() {
        assert_eq!(select().state, EntityState::Unknown);
    }

    #[test]
    fn should_move_last_changed_only_when_state_differs() {
        let mut entity = select();
        let first = entity.last_changed;

        let t1 = first + chrono::Duration::seconds(5);
        entity.update_state(EntityState::Unknown, t1);
        assert_eq!(entity.last_changed, first);
        assert_eq!(entity.last_updated, t1);

        let t2 = t1 + chrono::Duration::seconds(5);
        entity.update_state(EntityState::Value("Mop".to_string()), t2);
        assert_eq!(entity.last_changed, t2);
        assert_eq!(entity.last_updated, t2);
    }

    #[test]
    fn should_expose_attributes() {
        let entity = Entity::builder()
            .unique_id("robo_selected_scene")
            .friendly_name("Selected Scene")
            .kind(EntityKind::Select)
            .attribute(
                "options",
                AttributeValue::List(vec!["A".to_string(), "B".to_string()]),
            )
            .build()
            .unwrap();
        assert_eq!(
            entity.get_attribute("options"),
            Some(&AttributeValue::List(vec!["A".to_string(), "B".to_string()]))
        );
        assert!(entity.get_attribute("missing").is_none());
    }

    #[test]
    fn should_serialize_kind_in_lowercase() {
        let json = serde_json::to_value(select()).unwrap();
        assert_eq!(json["kind"], "select");
        assert_eq!(json["state"], "unknown");
    }
}
