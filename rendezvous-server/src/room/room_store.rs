use crate::error::LobbyError;
use crate::room::{Room, Timestamp};
use rendezvous_core::{RoomId, RoomRegistration};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// Authoritative in-memory table of rooms.
///
/// Plain data structure: it never broadcasts and never spawns anything. The
/// lobby actor owns the only instance, which keeps every mutation serialized.
#[derive(Debug, Default)]
pub struct RoomStore {
    rooms: HashMap<RoomId, Room>,
}

impl RoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the room named by the registration.
    ///
    /// Replacing drops the previous entry completely, signaling mailbox
    /// included.
    pub fn upsert(
        &mut self,
        registration: RoomRegistration,
        now: Timestamp,
    ) -> Result<RoomId, LobbyError> {
        let room = Room::from_registration(registration, now)?;
        let room_id = room.room_id.clone();

        if self.rooms.insert(room_id.clone(), room).is_some() {
            debug!(room = %room_id, "Room re-registered, previous entry replaced");
        } else {
            info!(room = %room_id, "Room registered");
        }

        Ok(room_id)
    }

    pub fn get(&self, room_id: &str) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    pub(crate) fn get_mut(&mut self, room_id: &str) -> Result<&mut Room, LobbyError> {
        self.rooms
            .get_mut(room_id)
            .ok_or_else(|| LobbyError::NotFound(RoomId::from(room_id)))
    }

    pub fn heartbeat(
        &mut self,
        room_id: &str,
        players: Option<u32>,
        now: Timestamp,
    ) -> Result<(), LobbyError> {
        let room = self.get_mut(room_id)?;
        if let Some(players) = players {
            room.players = players;
        }
        room.touch(now);
        Ok(())
    }

    /// Removes a room. Returns `false` when there was nothing to remove.
    pub fn remove(&mut self, room_id: &str) -> bool {
        let removed = self.rooms.remove(room_id).is_some();
        if removed {
            info!(room = %room_id, "Room removed");
        }
        removed
    }

    /// All rooms, in no particular order.
    pub fn list_all(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Evicts every room whose last heartbeat is strictly older than
    /// `timeout` at `now`, returning the evicted ids.
    pub fn evict_stale(&mut self, now: Instant, timeout: Duration) -> Vec<RoomId> {
        let stale: Vec<RoomId> = self
            .rooms
            .iter()
            .filter(|(_, room)| {
                now.saturating_duration_since(room.last_heartbeat.instant) > timeout
            })
            .map(|(id, _)| id.clone())
            .collect();

        for room_id in &stale {
            self.rooms.remove(room_id);
            info!(room = %room_id, "Room evicted after missing heartbeats");
        }

        stale
    }
}
