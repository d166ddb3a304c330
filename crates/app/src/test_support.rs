//! In-memory port implementations shared by the unit tests of this crate.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use scenehub_domain::credentials::UserCredentials;
use scenehub_domain::device::Device;
use scenehub_domain::error::{CloudError, SceneHubError};
use scenehub_domain::event::{Event, EventType};
use scenehub_domain::scene::{Scene, SceneId};

use crate::ports::{EventPublisher, SceneCloud};

pub const DUID: &str = "duid-robo";

pub fn device() -> Device {
    Device::builder()
        .duid(DUID)
        .name("Robo Vacuum")
        .build()
        .unwrap()
}

pub fn credentials() -> UserCredentials {
    UserCredentials::new("jane@example.com", "token-1")
}

pub fn abc() -> Vec<Scene> {
    vec![Scene::new(1, "A"), Scene::new(2, "B"), Scene::new(3, "C")]
}

#[derive(Default)]
pub struct FakeCloud {
    scenes: Mutex<HashMap<String, Vec<Scene>>>,
    fail_get: AtomicBool,
    fail_execute: AtomicBool,
    get_calls: AtomicUsize,
    executed: Mutex<Vec<SceneId>>,
}

impl FakeCloud {
    pub fn with_scenes(duid: &str, scenes: Vec<Scene>) -> Self {
        let cloud = Self::default();
        cloud.set_scenes(duid, scenes);
        cloud
    }

    pub fn set_scenes(&self, duid: &str, scenes: Vec<Scene>) {
        self.scenes
            .lock()
            .unwrap()
            .insert(duid.to_string(), scenes);
    }

    pub fn fail_get(&self, fail: bool) {
        self.fail_get.store(fail, Ordering::SeqCst);
    }

    pub fn fail_execute(&self, fail: bool) {
        self.fail_execute.store(fail, Ordering::SeqCst);
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn executed(&self) -> Vec<SceneId> {
        self.executed.lock().unwrap().clone()
    }
}

impl SceneCloud for FakeCloud {
    fn get_scenes(
        &self,
        _credentials: &UserCredentials,
        duid: &str,
    ) -> impl Future<Output = Result<Vec<Scene>, SceneHubError>> + Send {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        let result = if self.fail_get.load(Ordering::SeqCst) {
            Err(CloudError::Rejected {
                message: "scene list unavailable".to_string(),
            }
            .into())
        } else {
            Ok(self
                .scenes
                .lock()
                .unwrap()
                .get(duid)
                .cloned()
                .unwrap_or_default())
        };
        async move { result }
    }

    fn execute_scene(
        &self,
        _credentials: &UserCredentials,
        scene_id: SceneId,
    ) -> impl Future<Output = Result<(), SceneHubError>> + Send {
        let result = if self.fail_execute.load(Ordering::SeqCst) {
            Err(CloudError::Status {
                status: 503,
                body: "device offline".to_string(),
            }
            .into())
        } else {
            self.executed.lock().unwrap().push(scene_id);
            Ok(())
        };
        async move { result }
    }
}

#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<Event>>,
}

impl RecordingPublisher {
    pub fn events_of(&self, event_type: EventType) -> Vec<Event> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.event_type == event_type)
            .cloned()
            .collect()
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), SceneHubError>> + Send {
        self.events.lock().unwrap().push(event);
        async { Ok(()) }
    }
}

/// Formatted log output of everything traced while [`install`](Self::install)'s
/// guard is alive on the current thread.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Lines logged at `level`, e.g. `"WARN"`.
    pub fn at(&self, level: &str) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter(|line| line.trim_start().starts_with(level))
            .map(str::to_string)
            .collect()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
