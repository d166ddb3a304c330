//! Per-device coordinator — the hub a device's selector and trigger share.

use std::sync::Arc;

use scenehub_domain::credentials::UserCredentials;
use scenehub_domain::device::Device;
use scenehub_domain::error::SceneHubError;
use scenehub_domain::scene::{Scene, SceneId};

use crate::ports::SceneCloud;
use crate::selection_store::SelectionStore;

/// Carries everything a scene entity needs to talk about its device:
/// metadata, account credentials, the cloud client and the selection store.
pub struct SceneCoordinator<C> {
    device: Device,
    credentials: UserCredentials,
    cloud: Arc<C>,
    selections: SelectionStore,
}

impl<C: SceneCloud> SceneCoordinator<C> {
    /// Create a coordinator for `device`.
    ///
    /// `selections` should be the store shared by every device of the same
    /// account.
    pub fn new(
        device: Device,
        credentials: UserCredentials,
        cloud: Arc<C>,
        selections: SelectionStore,
    ) -> Self {
        Self {
            device,
            credentials,
            cloud,
            selections,
        }
    }

    #[must_use]
    pub fn device(&self) -> &Device {
        &self.device
    }

    #[must_use]
    pub fn selections(&self) -> &SelectionStore {
        &self.selections
    }

    /// The scene name currently selected for this device.
    #[must_use]
    pub fn selected_scene(&self) -> Option<String> {
        self.selections.get(&self.device.duid)
    }

    /// Record (or clear, with `None`) this device's selection.
    pub fn record_selection(&self, name: Option<String>) {
        self.selections.set(&self.device.duid, name);
    }

    /// Fetch this device's scenes from the cloud.
    ///
    /// # Errors
    ///
    /// Propagates whatever the cloud client reports.
    pub async fn fetch_scenes(&self) -> Result<Vec<Scene>, SceneHubError> {
        self.cloud
            .get_scenes(&self.credentials, &self.device.duid)
            .await
    }

    /// Run `scene_id` in the cloud.
    ///
    /// # Errors
    ///
    /// Propagates whatever the cloud client reports.
    pub async fn execute_scene(&self, scene_id: SceneId) -> Result<(), SceneHubError> {
        self.cloud.execute_scene(&self.credentials, scene_id).await
    }
}
