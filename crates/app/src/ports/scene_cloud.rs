//! Cloud port — the vendor service that owns scene definitions.

use std::future::Future;
use std::sync::Arc;

use scenehub_domain::credentials::UserCredentials;
use scenehub_domain::error::SceneHubError;
use scenehub_domain::scene::{Scene, SceneId};

/// Remote API that lists and runs scenes.
///
/// Both calls are fallible and may take as long as the network does; the
/// hub neither retries nor caches their results.
pub trait SceneCloud: Send + Sync {
    /// Fetch the scenes defined for the device with cloud id `duid`, in the
    /// order the cloud reports them.
    fn get_scenes(
        &self,
        credentials: &UserCredentials,
        duid: &str,
    ) -> impl Future<Output = Result<Vec<Scene>, SceneHubError>> + Send;

    /// Ask the cloud to run the scene `scene_id`.
    fn execute_scene(
        &self,
        credentials: &UserCredentials,
        scene_id: SceneId,
    ) -> impl Future<Output = Result<(), SceneHubError>> + Send;
}

impl<T: SceneCloud> SceneCloud for Arc<T> {
    fn get_scenes(
        &self,
        credentials: &UserCredentials,
        duid: &str,
    ) -> impl Future<Output = Result<Vec<Scene>, SceneHubError>> + Send {
        (**self).get_scenes(credentials, duid)
    }

    fn execute_scene(
        &self,
        credentials: &UserCredentials,
        scene_id: SceneId,
    ) -> impl Future<Output = Result<(), SceneHubError>> + Send {
        (**self).execute_scene(credentials, scene_id)
    }
}
