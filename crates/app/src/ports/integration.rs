//! Integration port — lifecycle and service-call handling for a platform.
//!
//! An integration bridges an external system (a vendor cloud, a demo
//! backend, …) into the hub. It creates its entities on startup and handles
//! service calls directed at entities it owns.

use std::future::Future;

use scenehub_domain::device::Device;
use scenehub_domain::entity::Entity;
use scenehub_domain::error::SceneHubError;

/// A pluggable platform of entities.
///
/// The binary crate calls the lifecycle methods in order:
///
/// 1. [`setup`](Self::setup) — create and attach entities
/// 2. (the server runs, forwarding service calls via [`handle_service_call`](Self::handle_service_call))
/// 3. [`teardown`](Self::teardown) — drop entities and clean up
pub trait Integration: Send + Sync {
    /// Unique name identifying this integration (e.g. `"roborock_scenes"`).
    fn name(&self) -> &'static str;

    /// Create entities for every configured device and attach them.
    ///
    /// Returns what was registered, grouped per device.
    fn setup(&mut self) -> impl Future<Output = Result<Vec<DiscoveredDevice>, SceneHubError>> + Send;

    /// Snapshots of every registered entity, ordered by entity id.
    fn entities(&self) -> Vec<Entity>;

    /// Snapshot of one entity by its entity id (e.g. `select.robo_selected_scene`).
    fn entity(&self, entity_id: &str) -> Option<Entity> {
        self.entities()
            .into_iter()
            .find(|entity| entity.entity_id == entity_id)
    }

    /// Handle a service call (e.g. `select_option`, `press`) for an entity
    /// owned by this integration.
    ///
    /// Returns the entity's state after handling the call.
    fn handle_service_call(
        &self,
        entity_id: &str,
        service: &str,
        data: serde_json::Value,
    ) -> impl Future<Output = Result<Entity, SceneHubError>> + Send;

    /// Called on graceful shutdown.
    fn teardown(&mut self) -> impl Future<Output = Result<(), SceneHubError>> + Send;
}

/// A device and the entities registered for it during setup.
#[derive(Debug, Clone)]
pub struct DiscoveredDevice {
    pub device: Device,
    pub entities: Vec<Entity>,
}
