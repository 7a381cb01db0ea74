use crate::http::AppState;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::http::HeaderMap;
use axum::http::header::UPGRADE;
use axum::response::{IntoResponse, Response};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    subscribe(ws, state)
}

/// Completes the upgrade and attaches the socket as a lobby subscriber.
pub fn subscribe(ws: WebSocketUpgrade, state: AppState) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// True when the request asks to switch to the WebSocket protocol.
pub fn is_websocket_upgrade(headers: &HeaderMap) -> bool {
    headers
        .get(UPGRADE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim().eq_ignore_ascii_case("websocket"))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let subscriber = state.hub.attach(tx);
    info!(%subscriber, "New lobby WebSocket connection");

    if let Err(e) = state.lobby.sync_subscriber(subscriber).await {
        warn!(%subscriber, "Initial sync failed: {}", e);
    }

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    // Subscribers only listen; inbound frames are drained until the peer leaves.
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Close(_) => break,
                Message::Text(text) => {
                    debug!(%subscriber, len = text.len(), "Ignoring inbound text frame")
                }
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    state.hub.detach(subscriber);
    info!(%subscriber, "Lobby WebSocket disconnected");
}
