use crate::config::LobbyConfig;
use crate::error::LobbyError;
use crate::http::AppState;
use crate::signaling::{is_websocket_upgrade, subscribe, ws_handler};
use anyhow::Context;
use axum::body::Bytes;
use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{FromRequestParts, Path, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rendezvous_core::{HeartbeatRequest, RoomRegistration, RoomView, SignalPayload};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

pub const SERVICE_NAME: &str = "rendezvous-signaling-server";

impl IntoResponse for LobbyError {
    fn into_response(self) -> Response {
        let status = match &self {
            LobbyError::Validation(_) => StatusCode::BAD_REQUEST,
            LobbyError::NotFound(_) => StatusCode::NOT_FOUND,
            LobbyError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Builds the HTTP + WebSocket router over `state`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/rooms", get(rooms_index).post(register_room))
        .route("/rooms/{room_id}", get(get_room).delete(delete_room))
        .route("/rooms/{room_id}/heartbeat", post(heartbeat))
        .route("/rooms/{room_id}/offer", get(get_offer).post(set_offer))
        .route("/rooms/{room_id}/answer", get(get_answer).post(set_answer))
        .route("/rooms/{room_id}/ice", get(get_ice).post(append_ice))
        .route("/ws/rooms", get(ws_handler))
        .layer(cors)
        .with_state(state)
}

/// Serves the lobby on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, config: LobbyConfig) -> anyhow::Result<()> {
    serve_with_state(listener, AppState::new(config)).await
}

/// Like [`serve`], over state the caller keeps a handle to.
pub async fn serve_with_state(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let addr = listener
        .local_addr()
        .context("Failed to read listener address")?;

    info!("Signaling server listening on http://{}", addr);

    axum::serve(listener, router(state))
        .await
        .context("HTTP server terminated with an error")?;

    Ok(())
}

/// Decodes a JSON body; an empty body decodes as `T::default()`.
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, LobbyError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        warn!("Rejected malformed JSON body: {}", e);
        LobbyError::Validation(format!("Invalid JSON body: {e}"))
    })
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}

async fn register_room(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, LobbyError> {
    let registration: RoomRegistration = parse_body(&body)?;
    state.lobby.register_room(registration).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /rooms` lists rooms, or subscribes when the client asks for a WebSocket.
async fn rooms_index(State(state): State<AppState>, request: Request) -> Response {
    if !is_websocket_upgrade(request.headers()) {
        return list_rooms(&state).await.into_response();
    }

    let (mut parts, _body) = request.into_parts();
    match WebSocketUpgrade::from_request_parts(&mut parts, &state).await {
        Ok(ws) => subscribe(ws, state),
        Err(rejection) => {
            warn!("Rejected WebSocket upgrade on /rooms: {}", rejection);
            rejection.into_response()
        }
    }
}

async fn list_rooms(state: &AppState) -> Result<Json<Vec<RoomView>>, LobbyError> {
    Ok(Json(state.lobby.list_rooms().await?))
}

async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomView>, LobbyError> {
    Ok(Json(state.lobby.get_room(room_id).await?))
}

async fn delete_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<StatusCode, LobbyError> {
    state.lobby.delete_room(room_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn heartbeat(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, LobbyError> {
    let request: HeartbeatRequest = parse_body(&body)?;
    state.lobby.heartbeat(room_id, request.players()).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn set_offer(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, LobbyError> {
    let payload: SignalPayload = parse_body(&body)?;
    state.lobby.set_offer(room_id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn set_answer(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, LobbyError> {
    let payload: SignalPayload = parse_body(&body)?;
    state.lobby.set_answer(room_id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn append_ice(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, LobbyError> {
    let payload: SignalPayload = parse_body(&body)?;
    state.lobby.append_ice(room_id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_offer(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<Option<SignalPayload>>, LobbyError> {
    Ok(Json(state.lobby.signaling(room_id).await?.offer))
}

async fn get_answer(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<Option<SignalPayload>>, LobbyError> {
    Ok(Json(state.lobby.signaling(room_id).await?.answer))
}

async fn get_ice(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<Vec<SignalPayload>>, LobbyError> {
    Ok(Json(state.lobby.signaling(room_id).await?.ice_candidates))
}
