//! Hub-local identifiers for devices, entities and events.
//!
//! These never leave the hub; the cloud addresses devices by `duid` and
//! scenes by [`SceneId`](crate::scene::SceneId).

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Random v4 identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

define_id!(
    /// Identifier of an [`Entity`](crate::entity::Entity) snapshot.
    EntityId
);

define_id!(
    /// Identifier of a configured [`Device`](crate::device::Device).
    DeviceId
);

define_id!(
    /// Identifier of a published [`Event`](crate::event::Event).
    EventId
);
