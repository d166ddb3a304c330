//! # scenehub-adapter-roborock
//!
//! Cloud adapter that implements the [`SceneCloud`](scenehub_app::ports::SceneCloud)
//! port against the Roborock HTTPS API.
//!
//! ## Endpoints
//!
//! | Port call | Request |
//! |-----------|---------|
//! | `get_scenes` | `GET {base_url}/user/scene/device/{duid}` |
//! | `execute_scene` | `POST {base_url}/user/scene/{id}/execute` |
//!
//! Every response is wrapped in a `{"success", "msg", "result"}` envelope.
//! Requests are bounded by the configured timeout. Nothing is retried.
//!
//! ## Authentication
//!
//! The configured token is sent verbatim as the `Authorization` header.
//! The user API expects a Hawk header derived from the account's rriot
//! `u`/`s`/`h` secrets; this adapter does not compute it, so the token must
//! be a pre-signed header value (or one accepted by a signing proxy placed
//! in front of `base_url`).
//!
//! ## Dependency rule
//!
//! Depends on `scenehub-app` (port traits) and `scenehub-domain` only.

mod api;
mod client;
mod config;
mod error;

pub use client::RoborockCloudClient;
pub use config::RoborockConfig;
pub use error::RoborockError;
