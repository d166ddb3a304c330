//! Entity state — what a UI shows for a control.

use serde::{Deserialize, Serialize};

/// Current state of an entity.
///
/// Selects report the selected option, buttons the time of the last press.
/// Both start out as [`Unknown`](Self::Unknown).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityState {
    #[default]
    Unknown,
    #[serde(untagged)]
    Value(String),
}

impl EntityState {
    /// `Value` for `Some`, `Unknown` for `None`.
    #[must_use]
    pub fn from_option(value: Option<String>) -> Self {
        value.map_or(Self::Unknown, Self::Value)
    }
}

impl std::fmt::Display for EntityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown"),
            Self::Value(value) => f.write_str(value),
        }
    }
}
