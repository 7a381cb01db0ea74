use crate::config::LobbyConfig;
use crate::error::LobbyError;
use crate::lobby::{Lobby, LobbyCommand};
use crate::signaling::SnapshotOutput;
use rendezvous_core::{
    RoomId, RoomRegistration, RoomView, SignalPayload, SignalingState, SubscriberId,
};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Cheap, cloneable front door to the lobby event loop.
#[derive(Clone)]
pub struct LobbyHandle {
    command_tx: mpsc::Sender<LobbyCommand>,
}

impl LobbyHandle {
    /// Spawns a lobby on the current runtime and returns a handle to it.
    ///
    /// The loop ends once the last handle is dropped.
    pub fn spawn(config: LobbyConfig, output: Arc<dyn SnapshotOutput>) -> (Self, JoinHandle<()>) {
        let (command_tx, command_rx) = mpsc::channel(config.command_buffer.max(1));
        let lobby = Lobby::new(config, command_rx, output);
        let task = tokio::spawn(lobby.run());

        (Self { command_tx }, task)
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> LobbyCommand,
    ) -> Result<T, LobbyError> {
        let (reply, rx) = oneshot::channel();
        self.command_tx
            .send(build(reply))
            .await
            .map_err(|_| LobbyError::Unavailable)?;
        rx.await.map_err(|_| LobbyError::Unavailable)
    }

    pub async fn register_room(&self, registration: RoomRegistration) -> Result<RoomId, LobbyError> {
        self.request(|reply| LobbyCommand::Register {
            registration,
            reply,
        })
        .await?
    }

    pub async fn list_rooms(&self) -> Result<Vec<RoomView>, LobbyError> {
        self.request(|reply| LobbyCommand::ListRooms { reply }).await
    }

    pub async fn get_room(&self, room_id: impl Into<RoomId>) -> Result<RoomView, LobbyError> {
        let room_id = room_id.into();
        self.request(|reply| LobbyCommand::GetRoom { room_id, reply })
            .await?
    }

    pub async fn heartbeat(
        &self,
        room_id: impl Into<RoomId>,
        players: Option<u32>,
    ) -> Result<(), LobbyError> {
        let room_id = room_id.into();
        self.request(|reply| LobbyCommand::Heartbeat {
            room_id,
            players,
            reply,
        })
        .await?
    }

    /// Idempotent. Returns whether a room was actually removed.
    pub async fn delete_room(&self, room_id: impl Into<RoomId>) -> Result<bool, LobbyError> {
        let room_id = room_id.into();
        self.request(|reply| LobbyCommand::Delete { room_id, reply })
            .await
    }

    pub async fn set_offer(
        &self,
        room_id: impl Into<RoomId>,
        payload: SignalPayload,
    ) -> Result<(), LobbyError> {
        let room_id = room_id.into();
        self.request(|reply| LobbyCommand::SetOffer {
            room_id,
            payload,
            reply,
        })
        .await?
    }

    pub async fn set_answer(
        &self,
        room_id: impl Into<RoomId>,
        payload: SignalPayload,
    ) -> Result<(), LobbyError> {
        let room_id = room_id.into();
        self.request(|reply| LobbyCommand::SetAnswer {
            room_id,
            payload,
            reply,
        })
        .await?
    }

    pub async fn append_ice(
        &self,
        room_id: impl Into<RoomId>,
        payload: SignalPayload,
    ) -> Result<(), LobbyError> {
        let room_id = room_id.into();
        self.request(|reply| LobbyCommand::AppendIce {
            room_id,
            payload,
            reply,
        })
        .await?
    }

    pub async fn signaling(&self, room_id: impl Into<RoomId>) -> Result<SignalingState, LobbyError> {
        let room_id = room_id.into();
        self.request(|reply| LobbyCommand::Signaling { room_id, reply })
            .await?
    }

    /// Sends the current snapshot to `subscriber` alone.
    pub async fn sync_subscriber(&self, subscriber: SubscriberId) -> Result<(), LobbyError> {
        self.request(|reply| LobbyCommand::Sync { subscriber, reply })
            .await
    }
}
