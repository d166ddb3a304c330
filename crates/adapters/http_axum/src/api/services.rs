//! Service call handler.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use scenehub_app::ports::Integration;
use scenehub_domain::entity::Entity;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /api/services/call`.
#[derive(Debug, Deserialize)]
pub struct ServiceCallRequest {
    pub entity_id: String,
    pub service: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// `POST /api/services/call`
///
/// Forwards the call to the integration and answers with the entity's
/// state after the call.
pub async fn call<I>(
    State(state): State<AppState<I>>,
    Json(req): Json<ServiceCallRequest>,
) -> Result<Json<Entity>, ApiError>
where
    I: Integration + 'static,
{
    tracing::debug!(entity_id = %req.entity_id, service = %req.service, "service call");
    let entity = state
        .integration
        .handle_service_call(&req.entity_id, &req.service, req.data)
        .await?;
    Ok(Json(entity))
}
