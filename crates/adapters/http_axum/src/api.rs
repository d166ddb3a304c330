//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod entities;
pub mod events;
#[allow(clippy::missing_errors_doc)]
pub mod services;

use axum::Router;
use axum::routing::{get, post};

use scenehub_app::ports::Integration;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<I>() -> Router<AppState<I>>
where
    I: Integration + 'static,
{
    Router::new()
        .route("/entities", get(entities::list::<I>))
        .route("/entities/{entity_id}", get(entities::get::<I>))
        .route("/services/call", post(services::call::<I>))
        .route("/events/stream", get(events::stream::<I>))
}
