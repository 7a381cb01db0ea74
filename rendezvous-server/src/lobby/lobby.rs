use crate::config::LobbyConfig;
use crate::error::LobbyError;
use crate::lobby::LobbyCommand;
use crate::room::{RoomStore, Timestamp};
use crate::signaling::SnapshotOutput;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// The lobby event loop.
///
/// Owns the room store outright; client commands and liveness sweeps are
/// handled one after another on the same task, so no two mutations ever
/// interleave.
pub struct Lobby {
    store: RoomStore,
    command_rx: mpsc::Receiver<LobbyCommand>,
    output: Arc<dyn SnapshotOutput>,
    config: LobbyConfig,
}

impl Lobby {
    pub fn new(
        config: LobbyConfig,
        command_rx: mpsc::Receiver<LobbyCommand>,
        output: Arc<dyn SnapshotOutput>,
    ) -> Self {
        Self {
            store: RoomStore::new(),
            command_rx,
            output,
            config,
        }
    }

    /// Runs until every handle has been dropped. Spawn it with `tokio::spawn`.
    pub async fn run(mut self) {
        info!(
            heartbeat_timeout = ?self.config.heartbeat_timeout,
            cleanup_interval = ?self.config.cleanup_interval,
            "Lobby event loop started"
        );

        // interval() panics on a zero period.
        let period = self.config.cleanup_interval.max(Duration::from_millis(1));
        let mut sweep = time::interval_at(Instant::now() + period, period);
        sweep.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                _ = sweep.tick() => self.sweep_stale().await,

                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(c) => self.handle_command(c).await,
                        None => {
                            info!("Command channel closed. Shutting down lobby.");
                            break;
                        }
                    }
                }
            }
        }

        info!("Lobby event loop finished");
    }

    async fn handle_command(&mut self, cmd: LobbyCommand) {
        match cmd {
            LobbyCommand::Register {
                registration,
                reply,
            } => {
                let result = self.store.upsert(registration, Timestamp::now());
                if result.is_ok() {
                    self.broadcast().await;
                }
                let _ = reply.send(result);
            }

            LobbyCommand::ListRooms { reply } => {
                let _ = reply.send(self.store.snapshot().rooms);
            }

            LobbyCommand::GetRoom { room_id, reply } => {
                let result = self
                    .store
                    .view(room_id.as_str())
                    .ok_or(LobbyError::NotFound(room_id));
                let _ = reply.send(result);
            }

            LobbyCommand::Heartbeat {
                room_id,
                players,
                reply,
            } => {
                let result = self
                    .store
                    .heartbeat(room_id.as_str(), players, Timestamp::now());
                if result.is_ok() {
                    debug!(room = %room_id, ?players, "Heartbeat");
                    self.broadcast().await;
                }
                let _ = reply.send(result);
            }

            LobbyCommand::Delete { room_id, reply } => {
                let removed = self.store.remove(room_id.as_str());
                if removed {
                    self.broadcast().await;
                }
                let _ = reply.send(removed);
            }

            LobbyCommand::SetOffer {
                room_id,
                payload,
                reply,
            } => {
                let _ = reply.send(self.store.set_offer(room_id.as_str(), payload));
            }

            LobbyCommand::SetAnswer {
                room_id,
                payload,
                reply,
            } => {
                let _ = reply.send(self.store.set_answer(room_id.as_str(), payload));
            }

            LobbyCommand::AppendIce {
                room_id,
                payload,
                reply,
            } => {
                let _ = reply.send(self.store.append_ice_candidate(room_id.as_str(), payload));
            }

            LobbyCommand::Signaling { room_id, reply } => {
                let _ = reply.send(self.store.signaling(room_id.as_str()));
            }

            LobbyCommand::Sync { subscriber, reply } => {
                let snapshot = self.store.snapshot();
                self.output.send_to(subscriber, &snapshot).await;
                let _ = reply.send(());
            }
        }
    }

    async fn sweep_stale(&mut self) {
        let evicted = self
            .store
            .evict_stale(Instant::now(), self.config.heartbeat_timeout);

        if evicted.is_empty() {
            return;
        }

        info!(count = evicted.len(), "Liveness sweep evicted stale rooms");
        self.broadcast().await;
    }

    async fn broadcast(&self) {
        let snapshot = self.store.snapshot();
        self.output.broadcast(&snapshot).await;
    }
}
