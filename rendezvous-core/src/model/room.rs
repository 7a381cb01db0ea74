use crate::model::count::json_count;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Borrow;
use std::fmt;

pub const DEFAULT_MAX_PLAYERS: u32 = 4;
pub const DEFAULT_PLAYERS: u32 = 1;
pub const DEFAULT_MODE: &str = "P2P";

/// Room identifier chosen by the creating client.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for RoomId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of a register-room request. Everything except `room_id` is optional
/// and gets a default when the room is stored.
///
/// The player counts stay loosely typed so that a bad count never rejects an
/// otherwise valid registration; see [`RoomRegistration::max_players`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRegistration {
    pub room_id: Option<String>,
    pub name: Option<String>,
    pub is_public: Option<bool>,
    pub join_code: Option<String>,
    pub max_players: Option<Value>,
    pub players: Option<Value>,
    pub mode: Option<String>,
    pub host_peer_id: Option<String>,
}

impl RoomRegistration {
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            room_id: Some(room_id.into()),
            ..Default::default()
        }
    }

    pub fn with_max_players(mut self, max_players: u32) -> Self {
        self.max_players = Some(Value::from(max_players));
        self
    }

    pub fn with_players(mut self, players: u32) -> Self {
        self.players = Some(Value::from(players));
        self
    }

    /// Capacity if it was sent as a positive integer, `None` otherwise.
    pub fn max_players(&self) -> Option<u32> {
        self.max_players
            .as_ref()
            .and_then(json_count)
            .filter(|&n| n > 0)
    }

    /// Occupancy if it was sent as a positive integer, `None` otherwise.
    pub fn players(&self) -> Option<u32> {
        self.players.as_ref().and_then(json_count).filter(|&n| n > 0)
    }
}

/// Public projection of a room as shown in the lobby list.
///
/// Signaling payloads are never part of this view, and `join_code` is only
/// populated for private rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomView {
    pub room_id: RoomId,
    pub name: String,
    pub is_public: bool,
    pub join_code: Option<String>,
    pub max_players: u32,
    pub players: u32,
    pub mode: String,
    pub host_peer_id: String,
    /// Unix epoch milliseconds of the last heartbeat.
    pub last_heartbeat: u64,
}

/// Message pushed to every subscriber: `{ "rooms": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomsSnapshot {
    pub rooms: Vec<RoomView>,
}

impl RoomsSnapshot {
    pub fn find(&self, room_id: &str) -> Option<&RoomView> {
        self.rooms.iter().find(|r| r.room_id.as_str() == room_id)
    }
}
