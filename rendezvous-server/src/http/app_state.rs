use crate::config::LobbyConfig;
use crate::lobby::LobbyHandle;
use crate::signaling::SubscriberHub;
use std::sync::Arc;

/// Shared state behind every route: the lobby and the live subscriber set.
#[derive(Clone)]
pub struct AppState {
    pub lobby: LobbyHandle,
    pub hub: SubscriberHub,
}

impl AppState {
    /// Spawns a lobby that broadcasts into a fresh subscriber hub.
    pub fn new(config: LobbyConfig) -> Self {
        let hub = SubscriberHub::new();
        let (lobby, _task) = LobbyHandle::spawn(config, Arc::new(hub.clone()));

        Self { lobby, hub }
    }
}
