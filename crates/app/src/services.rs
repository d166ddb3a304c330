//! Application services — the scene entities and the platform that owns them.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod scene_platform;
pub mod scene_select;
pub mod scene_trigger;
