//! Server-Sent Events (SSE) stream for real-time updates.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use scenehub_app::ports::Integration;

use crate::state::AppState;

/// `GET /api/events/stream` — SSE stream of domain events.
///
/// Every event published on the bus after the client connects (entity
/// creation, state changes, executed scenes) is sent as a JSON `data:`
/// frame, with the event type as the SSE event name.
pub async fn stream<I>(
    State(state): State<AppState<I>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>>
where
    I: Integration + 'static,
{
    let event_rx = state.event_bus.subscribe();
    let event_stream = BroadcastStream::new(event_rx).filter_map(|result| match result {
        Ok(event) => match serde_json::to_string(&event) {
            Ok(json) => Some(Ok(Event::default()
                .event(event.event_type.to_string())
                .data(json))),
            Err(err) => {
                tracing::warn!(%err, "failed to serialize event for SSE stream");
                None
            }
        },
        Err(BroadcastStreamRecvError::Lagged(n)) => {
            tracing::warn!(skipped = n, "SSE subscriber lagged, some events were dropped");
            None
        }
    });

    Sse::new(event_stream).keep_alive(KeepAlive::default())
}
