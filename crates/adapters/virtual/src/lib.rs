//! # scenehub-adapter-virtual
//!
//! Virtual/demo cloud that serves fixture scenes, for running the hub
//! without a vendor account and for end-to-end tests.
//!
//! ## Behaviour
//!
//! | Call | Result |
//! |------|--------|
//! | `get_scenes(duid)` | Scenes configured for `duid`, else the default set |
//! | `execute_scene(id)` | Recorded when `id` is a known scene, `NotFound` otherwise |
//!
//! ## Dependency rule
//!
//! Depends on `scenehub-app` (port traits) and `scenehub-domain` only.

mod config;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use scenehub_app::ports::SceneCloud;
use scenehub_domain::credentials::UserCredentials;
use scenehub_domain::error::{NotFoundError, SceneHubError};
use scenehub_domain::scene::{Scene, SceneId};

pub use config::VirtualConfig;

/// In-memory stand-in for the vendor cloud.
pub struct VirtualSceneCloud {
    default_scenes: Vec<Scene>,
    scenes: HashMap<String, Vec<Scene>>,
    executed: Mutex<Vec<SceneId>>,
}

impl Default for VirtualSceneCloud {
    fn default() -> Self {
        Self {
            default_scenes: vec![
                Scene::new(1, "Full clean"),
                Scene::new(2, "Kitchen quick clean"),
                Scene::new(3, "Mop after dinner"),
            ],
            scenes: HashMap::new(),
            executed: Mutex::new(Vec::new()),
        }
    }
}

impl VirtualSceneCloud {
    /// Build from configuration; devices without an entry get the default set.
    #[must_use]
    pub fn from_config(config: &VirtualConfig) -> Self {
        config
            .scenes
            .iter()
            .fold(Self::default(), |cloud, (duid, scenes)| {
                cloud.with_device_scenes(duid.clone(), scenes.clone())
            })
    }

    /// Serve `scenes` for `duid` instead of the default set.
    #[must_use]
    pub fn with_device_scenes(mut self, duid: impl Into<String>, scenes: Vec<Scene>) -> Self {
        self.scenes.insert(duid.into(), scenes);
        self
    }

    /// Scene ids executed so far, oldest first.
    #[must_use]
    pub fn executed(&self) -> Vec<SceneId> {
        self.executed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn scenes_for(&self, duid: &str) -> &[Scene] {
        self.scenes.get(duid).unwrap_or(&self.default_scenes)
    }

    fn is_known(&self, scene_id: SceneId) -> bool {
        self.default_scenes
            .iter()
            .chain(self.scenes.values().flatten())
            .any(|scene| scene.id == scene_id)
    }
}

impl SceneCloud for VirtualSceneCloud {
    fn get_scenes(
        &self,
        _credentials: &UserCredentials,
        duid: &str,
    ) -> impl Future<Output = Result<Vec<Scene>, SceneHubError>> + Send {
        let scenes = self.scenes_for(duid).to_vec();
        tracing::debug!(duid, count = scenes.len(), "serving virtual scenes");
        async move { Ok(scenes) }
    }

    fn execute_scene(
        &self,
        _credentials: &UserCredentials,
        scene_id: SceneId,
    ) -> impl Future<Output = Result<(), SceneHubError>> + Send {
        let result = if self.is_known(scene_id) {
            self.executed
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(scene_id);
            tracing::info!(%scene_id, "virtual scene executed");
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "Scene",
                id: scene_id.to_string(),
            }
            .into())
        };
        async move { result }
    }
}
