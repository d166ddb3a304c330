//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `scenehub.toml` in the working directory. Every field has a
//! default so the file is optional: without it the daemon serves one demo
//! device from the virtual cloud. Environment variables take precedence
//! over file values.

use scenehub_adapter_roborock::RoborockConfig;
use scenehub_adapter_virtual::VirtualConfig;
use scenehub_domain::credentials::UserCredentials;
use scenehub_domain::device::Device;
use scenehub_domain::error::SceneHubError;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Cloud account and backend selection.
    pub cloud: CloudConfig,
    /// Fixture scenes for the virtual backend.
    #[serde(rename = "virtual")]
    pub virtual_cloud: VirtualConfig,
    /// Devices of the account, one selector and trigger each.
    pub devices: DevicesConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Which cloud implementation serves scenes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudBackend {
    /// In-memory demo cloud.
    #[default]
    Virtual,
    /// The Roborock HTTPS API.
    Roborock,
}

/// Cloud account configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    pub backend: CloudBackend,
    /// Regional API base URL.
    pub base_url: String,
    pub username: String,
    /// Pre-signed `Authorization` value sent with every request.
    pub token: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// `[[devices]]` entries.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct DevicesConfig(pub Vec<DeviceConfig>);

/// One configured device.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    /// Cloud device identifier.
    pub duid: String,
    /// Display name; entity ids are derived from it.
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
}

impl Config {
    /// Load configuration from `scenehub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("scenehub.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SCENEHUB_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("SCENEHUB_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("SCENEHUB_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("SCENEHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("SCENEHUB_CLOUD_BASE_URL") {
            self.cloud.base_url = val;
        }
        if let Some(val) = var("SCENEHUB_CLOUD_USERNAME") {
            self.cloud.username = val;
        }
        if let Some(val) = var("SCENEHUB_CLOUD_TOKEN") {
            self.cloud.token = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.devices.0.is_empty() {
            return Err(ConfigError::Validation(
                "at least one device must be configured".to_string(),
            ));
        }
        if self.cloud.backend == CloudBackend::Roborock && self.cloud.token.is_empty() {
            return Err(ConfigError::Validation(
                "the roborock backend requires a cloud token".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the configured devices.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a device with an empty duid or name.
    pub fn devices(&self) -> Result<Vec<Device>, SceneHubError> {
        self.devices.0.iter().map(DeviceConfig::to_device).collect()
    }
}

impl CloudConfig {
    #[must_use]
    pub fn credentials(&self) -> UserCredentials {
        UserCredentials::new(&self.username, &self.token)
    }

    /// Connection settings for the Roborock client.
    #[must_use]
    pub fn roborock(&self) -> RoborockConfig {
        RoborockConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

impl DeviceConfig {
    fn to_device(&self) -> Result<Device, SceneHubError> {
        let builder = Device::builder()
            .duid(&self.duid)
            .name(&self.name)
            .manufacturer("Roborock");
        match &self.model {
            Some(model) => builder.model(model).build(),
            None => builder.build(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "scenehubd=info,scenehub=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for CloudConfig {
    fn default() -> Self {
        let roborock = RoborockConfig::default();
        Self {
            backend: CloudBackend::default(),
            base_url: roborock.base_url,
            username: String::new(),
            token: String::new(),
            timeout_secs: roborock.timeout_secs,
        }
    }
}

impl Default for DevicesConfig {
    fn default() -> Self {
        Self(vec![DeviceConfig {
            duid: "demo-duid".to_string(),
            name: "Demo Vacuum".to_string(),
            model: None,
        }])
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
