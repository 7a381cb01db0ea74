use std::time::Duration;

pub const DEFAULT_HEARTBEAT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_secs(10);

/// Lobby tuning knobs.
#[derive(Debug, Clone)]
pub struct LobbyConfig {
    /// A room without a heartbeat for longer than this is evicted.
    pub heartbeat_timeout: Duration,
    /// Period of the liveness sweep.
    pub cleanup_interval: Duration,
    /// Capacity of the lobby command queue.
    pub command_buffer: usize,
}

impl LobbyConfig {
    pub fn heartbeat_timeout(mut self, timeout: Duration) -> Self {
        self.heartbeat_timeout = timeout;
        self
    }

    pub fn cleanup_interval(mut self, interval: Duration) -> Self {
        self.cleanup_interval = interval;
        self
    }

    pub fn command_buffer(mut self, capacity: usize) -> Self {
        self.command_buffer = capacity.max(1);
        self
    }
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            heartbeat_timeout: DEFAULT_HEARTBEAT_TIMEOUT,
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL,
            command_buffer: 256,
        }
    }
}
