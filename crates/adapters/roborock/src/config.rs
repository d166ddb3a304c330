//! Roborock cloud configuration.

use serde::Deserialize;

/// Connection settings for the Roborock cloud.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoborockConfig {
    /// Regional API base URL, e.g. `https://api-eu.roborock.com`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RoborockConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api-eu.roborock.com".to_string(),
            timeout_secs: 30,
        }
    }
}
