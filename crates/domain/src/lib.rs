//! # scenehub-domain
//!
//! Pure domain model for the scenehub scene automation hub.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (cloud-connected appliances that own scenes)
//! - Define **Scenes** (named automation presets defined in the vendor cloud)
//! - Define **Entities** (the selector and trigger controls exposed to a UI)
//! - Define **Events** (state-change and execution records)
//! - Derive stable entity identifiers from device names (slugify)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod credentials;
pub mod error;
pub mod id;
pub mod slug;
pub mod time;

pub mod device;
pub mod entity;
pub mod event;
pub mod scene;
