use crate::signaling::SnapshotOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use rendezvous_core::{RoomsSnapshot, SubscriberId};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

struct HubInner {
    subscribers: DashMap<SubscriberId, mpsc::UnboundedSender<Message>>,
}

/// Registry of live WebSocket subscribers.
///
/// Each connection owns a writer task draining its unbounded queue, so pushing
/// here never waits on a slow socket.
#[derive(Clone)]
pub struct SubscriberHub {
    inner: Arc<HubInner>,
}

impl SubscriberHub {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(HubInner {
                subscribers: DashMap::new(),
            }),
        }
    }

    /// Registers `tx` under a fresh id.
    ///
    /// The queue is unbounded: while a peer's writer is stalled every snapshot
    /// pushed to it stays buffered, and the backlog is only freed once the
    /// connection ends and [`SubscriberHub::detach`] drops the sender.
    pub fn attach(&self, tx: mpsc::UnboundedSender<Message>) -> SubscriberId {
        let subscriber = SubscriberId::new();
        self.inner.subscribers.insert(subscriber, tx);
        info!(%subscriber, "Subscriber attached");
        subscriber
    }

    /// Returns `false` if the subscriber was already gone.
    pub fn detach(&self, subscriber: SubscriberId) -> bool {
        let removed = self.inner.subscribers.remove(&subscriber).is_some();
        if removed {
            info!(%subscriber, "Subscriber detached");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.subscribers.is_empty()
    }

    fn encode(snapshot: &RoomsSnapshot) -> Option<Message> {
        match serde_json::to_string(snapshot) {
            Ok(json) => Some(Message::Text(json.into())),
            Err(e) => {
                error!("Failed to serialize rooms snapshot: {}", e);
                None
            }
        }
    }
}

impl Default for SubscriberHub {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotOutput for SubscriberHub {
    async fn broadcast(&self, snapshot: &RoomsSnapshot) {
        let Some(msg) = Self::encode(snapshot) else {
            return;
        };

        let mut delivered = 0usize;
        for entry in self.inner.subscribers.iter() {
            let tx = entry.value();
            // Closing connections are skipped; they leave on their own detach.
            if tx.is_closed() {
                continue;
            }
            match tx.send(msg.clone()) {
                Ok(()) => delivered += 1,
                Err(_) => debug!(subscriber = %entry.key(), "Dropped snapshot for closed subscriber"),
            }
        }

        debug!(
            rooms = snapshot.rooms.len(),
            subscribers = delivered,
            "Rooms snapshot broadcast"
        );
    }

    async fn send_to(&self, subscriber: SubscriberId, snapshot: &RoomsSnapshot) {
        let Some(tx) = self.inner.subscribers.get(&subscriber) else {
            warn!(%subscriber, "Attempted to sync a detached subscriber");
            return;
        };
        let Some(msg) = Self::encode(snapshot) else {
            return;
        };
        if tx.send(msg).is_err() {
            debug!(%subscriber, "Initial snapshot dropped, subscriber closed");
        }
    }
}
