use rendezvous_core::RoomId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LobbyError {
    /// Required input missing or malformed.
    #[error("{0}")]
    Validation(String),

    #[error("Room not found: {0}")]
    NotFound(RoomId),

    /// The lobby event loop is gone; only seen during shutdown.
    #[error("Lobby is not running")]
    Unavailable,
}
