//! JSON REST handlers for entities.

use axum::Json;
use axum::extract::{Path, State};

use scenehub_app::ports::Integration;
use scenehub_domain::entity::Entity;
use scenehub_domain::error::{NotFoundError, SceneHubError};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/entities`
pub async fn list<I>(State(state): State<AppState<I>>) -> Json<Vec<Entity>>
where
    I: Integration + 'static,
{
    Json(state.integration.entities())
}

/// `GET /api/entities/{entity_id}`
pub async fn get<I>(
    State(state): State<AppState<I>>,
    Path(entity_id): Path<String>,
) -> Result<Json<Entity>, ApiError>
where
    I: Integration + 'static,
{
    let entity = state
        .integration
        .entity(&entity_id)
        .ok_or_else(|| {
            SceneHubError::from(NotFoundError {
                entity: "Entity",
                id: entity_id,
            })
        })?;
    Ok(Json(entity))
}
