//! # scenehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for UIs and scripts:
//!   `/api/entities`, `/api/services/call`, `/api/events/stream`
//! - Map HTTP requests into service calls on the scene platform (driving adapter)
//! - Map results and [`SceneHubError`](scenehub_domain::error::SceneHubError)s
//!   into HTTP responses
//!
//! ## Dependency rule
//! Depends on `scenehub-app` (for port traits and the event bus) and
//! `scenehub-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
