use crate::room::{Room, RoomStore};
use rendezvous_core::{RoomView, RoomsSnapshot};

impl From<&Room> for RoomView {
    fn from(room: &Room) -> Self {
        let name = if room.name.is_empty() {
            room.room_id.to_string()
        } else {
            room.name.clone()
        };

        // A public room's join code must never leave the server.
        let join_code = if room.is_public {
            None
        } else {
            room.join_code.clone()
        };

        RoomView {
            room_id: room.room_id.clone(),
            name,
            is_public: room.is_public,
            join_code,
            max_players: room.max_players,
            players: room.players,
            mode: room.mode.clone(),
            host_peer_id: room.host_peer_id.clone(),
            last_heartbeat: room.last_heartbeat.unix_ms,
        }
    }
}

impl RoomStore {
    pub fn view(&self, room_id: &str) -> Option<RoomView> {
        self.get(room_id).map(RoomView::from)
    }

    pub fn snapshot(&self) -> RoomsSnapshot {
        RoomsSnapshot {
            rooms: self.list_all().map(RoomView::from).collect(),
        }
    }
}
