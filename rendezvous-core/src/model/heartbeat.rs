use crate::model::count::json_count;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a heartbeat request.
///
/// `players` is kept loosely typed: anything other than a non-negative integer
/// is ignored rather than rejected, the heartbeat itself still counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeartbeatRequest {
    #[serde(default)]
    pub players: Option<Value>,
}

impl HeartbeatRequest {
    pub fn with_players(players: u32) -> Self {
        Self {
            players: Some(Value::from(players)),
        }
    }

    pub fn players(&self) -> Option<u32> {
        self.players.as_ref().and_then(json_count)
    }
}
