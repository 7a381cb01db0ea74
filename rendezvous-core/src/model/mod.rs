mod count;
mod heartbeat;
mod room;
mod signaling;
mod subscriber;

pub use heartbeat::HeartbeatRequest;
pub use room::{
    DEFAULT_MAX_PLAYERS, DEFAULT_MODE, DEFAULT_PLAYERS, RoomId, RoomRegistration, RoomView,
    RoomsSnapshot,
};
pub use signaling::{SignalPayload, SignalingState};
pub use subscriber::SubscriberId;
