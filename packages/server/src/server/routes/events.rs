//! SSE streaming endpoint.
//!
//! GET /events
//!
//! Subscribes to the shop event hub and forwards every event to the
//! dashboard as a named SSE event; the name matches the payload's `type`
//! tag so EventSource listeners can bind per event kind.
//!
//! No auth: dashboards hang on the shop wall and the server only listens
//! on the shop network.

use std::convert::Infallible;

use axum::{
    extract::Extension,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, StreamExt};
use tokio_stream::wrappers::BroadcastStream;

use crate::server::app::AppState;

/// Logs the disconnect when the dashboard's EventSource goes away and the
/// stream is dropped.
struct ConnectionGuard;

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        tracing::info!("dashboard disconnected from event stream");
    }
}

pub async fn events_handler(
    Extension(state): Extension<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, Infallible>>> {
    let rx = state.deps.events.subscribe();
    tracing::info!(
        observers = state.deps.events.observer_count(),
        "dashboard connected to event stream"
    );

    // Stream with connected event and lag handling
    let connected =
        stream::once(async { Ok::<_, Infallible>(Event::default().event("connected").data("ok")) });

    let guard = ConnectionGuard;
    let events = BroadcastStream::new(rx)
        .filter_map(|result| async {
            match result {
                Ok(shop_event) => Event::default()
                    .event(shop_event.name())
                    .json_data(&shop_event)
                    .ok()
                    .map(Ok),
                Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(n)) => {
                    Event::default()
                        .event("lagged")
                        .json_data(&serde_json::json!({"missed": n}))
                        .ok()
                        .map(Ok)
                }
            }
        })
        .map(move |event| {
            let _ = &guard;
            event
        });

    Sse::new(connected.chain(events)).keep_alive(KeepAlive::default())
}
