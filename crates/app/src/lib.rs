//! # scenehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `SceneCloud` — list a device's scenes, execute a scene
//!   - `EventPublisher` — fan out domain events
//!   - `Integration` — lifecycle and service-call handling for a platform
//! - Provide the scene **selector** and **trigger** entities and the
//!   **platform** that creates one pair per device
//! - Provide **in-process infrastructure** (event bus, selection store) that
//!   doesn't need IO
//!
//! ## Dependency rule
//! Depends on `scenehub-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod coordinator;
pub mod event_bus;
pub mod ports;
pub mod selection_store;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;
