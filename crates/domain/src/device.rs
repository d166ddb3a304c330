//! Device — a cloud-connected appliance whose scenes the hub exposes.

use serde::{Deserialize, Serialize};

use crate::error::{SceneHubError, ValidationError};
use crate::id::DeviceId;
use crate::slug::slugify;

/// A device registered with the vendor cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    /// Identifier assigned by the vendor cloud; scene lookups are keyed on it.
    pub duid: String,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SceneHubError::Validation`] when `name` or `duid` is empty.
    pub fn validate(&self) -> Result<(), SceneHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.duid.is_empty() {
            return Err(ValidationError::EmptyDuid.into());
        }
        Ok(())
    }

    /// Slug of the device name, the stem of every entity id it owns.
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    duid: Option<String>,
    name: Option<String>,
    model: Option<String>,
    manufacturer: Option<String>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn duid(mut self, duid: impl Into<String>) -> Self {
        self.duid = Some(duid.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`SceneHubError::Validation`] if `name` or `duid` is missing or empty.
    pub fn build(self) -> Result<Device, SceneHubError> {
        let device = Device {
            id: DeviceId::new(),
            duid: self.duid.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            model: self.model,
            manufacturer: self.manufacturer,
        };
        device.validate()?;
        Ok(device)
    }
}
