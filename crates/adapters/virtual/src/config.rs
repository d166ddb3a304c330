//! Virtual cloud configuration.

use std::collections::BTreeMap;

use scenehub_domain::scene::Scene;
use serde::Deserialize;

/// Fixture scenes served by the virtual cloud, keyed by device duid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VirtualConfig {
    pub scenes: BTreeMap<String, Vec<Scene>>,
}
