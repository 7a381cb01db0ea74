use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque WebRTC signaling blob (offer, answer or ICE candidate).
///
/// Stored and forwarded as-is; its structure is never inspected here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalPayload(pub Value);

impl From<Value> for SignalPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Signaling artifacts attached to one room, served on the room-specific
/// channel rather than the lobby list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalingState {
    pub offer: Option<SignalPayload>,
    pub answer: Option<SignalPayload>,
    pub ice_candidates: Vec<SignalPayload>,
}
