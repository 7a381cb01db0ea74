use crate::error::LobbyError;
use rendezvous_core::{
    RoomId, RoomRegistration, RoomView, SignalPayload, SignalingState, SubscriberId,
};
use tokio::sync::oneshot;

pub type Reply<T> = oneshot::Sender<T>;

/// Requests handled by the lobby event loop, one at a time.
#[derive(Debug)]
pub enum LobbyCommand {
    /// Create or overwrite a room. Broadcasts on success.
    Register {
        registration: RoomRegistration,
        reply: Reply<Result<RoomId, LobbyError>>,
    },

    ListRooms {
        reply: Reply<Vec<RoomView>>,
    },

    GetRoom {
        room_id: RoomId,
        reply: Reply<Result<RoomView, LobbyError>>,
    },

    /// Refresh liveness and optionally occupancy. Broadcasts on success.
    Heartbeat {
        room_id: RoomId,
        players: Option<u32>,
        reply: Reply<Result<(), LobbyError>>,
    },

    /// Remove a room. Broadcasts only if a room was actually removed.
    Delete {
        room_id: RoomId,
        reply: Reply<bool>,
    },

    SetOffer {
        room_id: RoomId,
        payload: SignalPayload,
        reply: Reply<Result<(), LobbyError>>,
    },

    SetAnswer {
        room_id: RoomId,
        payload: SignalPayload,
        reply: Reply<Result<(), LobbyError>>,
    },

    AppendIce {
        room_id: RoomId,
        payload: SignalPayload,
        reply: Reply<Result<(), LobbyError>>,
    },

    Signaling {
        room_id: RoomId,
        reply: Reply<Result<SignalingState, LobbyError>>,
    },

    /// Push the current snapshot to a freshly attached subscriber.
    Sync {
        subscriber: SubscriberId,
        reply: Reply<()>,
    },
}
