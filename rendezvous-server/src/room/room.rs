use crate::error::LobbyError;
use rendezvous_core::{
    DEFAULT_MAX_PLAYERS, DEFAULT_MODE, DEFAULT_PLAYERS, RoomId, RoomRegistration, SignalPayload,
};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::time::Instant;

/// Moment a liveness signal was observed.
///
/// `instant` drives expiry, `unix_ms` is only for display in the lobby list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub instant: Instant,
    pub unix_ms: u64,
}

impl Timestamp {
    pub fn now() -> Self {
        let unix_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default();

        Self {
            instant: Instant::now(),
            unix_ms,
        }
    }
}

/// A registered room together with its signaling mailbox.
#[derive(Debug, Clone)]
pub struct Room {
    pub room_id: RoomId,
    pub name: String,
    pub is_public: bool,
    pub join_code: Option<String>,
    pub max_players: u32,
    pub players: u32,
    pub mode: String,
    pub host_peer_id: String,
    pub last_heartbeat: Timestamp,

    pub offer: Option<SignalPayload>,
    pub answer: Option<SignalPayload>,
    pub ice_candidates: Vec<SignalPayload>,
}

impl Room {
    /// Builds a fresh room from a registration, filling in defaults.
    ///
    /// Counts that are not positive integers fall back to the defaults. The
    /// occupancy is not checked against the capacity.
    pub fn from_registration(
        registration: RoomRegistration,
        now: Timestamp,
    ) -> Result<Self, LobbyError> {
        let max_players = registration.max_players().unwrap_or(DEFAULT_MAX_PLAYERS);
        let players = registration.players().unwrap_or(DEFAULT_PLAYERS);

        let room_id = match registration.room_id {
            Some(id) if !id.is_empty() => RoomId::from(id),
            _ => return Err(LobbyError::Validation("roomId is required".to_owned())),
        };

        let name = registration
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| room_id.to_string());

        Ok(Self {
            name,
            is_public: registration.is_public.unwrap_or(true),
            join_code: registration.join_code,
            max_players,
            players,
            mode: registration
                .mode
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_MODE.to_owned()),
            host_peer_id: registration.host_peer_id.unwrap_or_default(),
            last_heartbeat: now,
            offer: None,
            answer: None,
            ice_candidates: Vec::new(),
            room_id,
        })
    }

    pub fn touch(&mut self, now: Timestamp) {
        self.last_heartbeat = now;
    }
}
