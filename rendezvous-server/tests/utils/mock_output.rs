use async_trait::async_trait;
use rendezvous_core::{RoomsSnapshot, SubscriberId};
use rendezvous_server::SnapshotOutput;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

#[derive(Debug, Clone)]
pub enum OutputEvent {
    Broadcast(RoomsSnapshot),
    Direct(SubscriberId, RoomsSnapshot),
}

/// Mock SnapshotOutput that records every snapshot the lobby pushes.
#[derive(Clone)]
pub struct MockSnapshotOutput {
    /// Live feed of captured events.
    tx: mpsc::UnboundedSender<OutputEvent>,
    /// All captured events (for verification).
    events: Arc<Mutex<Vec<OutputEvent>>>,
}

impl MockSnapshotOutput {
    /// Create a new MockSnapshotOutput and its receiver channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OutputEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let output = Self {
            tx,
            events: Arc::new(Mutex::new(Vec::new())),
        };
        (output, rx)
    }

    /// Create a MockSnapshotOutput without a receiver (events are only stored).
    pub fn new_stored_only() -> Self {
        let (output, _rx) = Self::new();
        output
    }

    pub async fn broadcast_count(&self) -> usize {
        self.events
            .lock()
            .await
            .iter()
            .filter(|e| matches!(e, OutputEvent::Broadcast(_)))
            .count()
    }

    pub async fn last_broadcast(&self) -> Option<RoomsSnapshot> {
        self.events.lock().await.iter().rev().find_map(|e| match e {
            OutputEvent::Broadcast(snapshot) => Some(snapshot.clone()),
            _ => None,
        })
    }

    /// Snapshots sent to one subscriber only.
    pub async fn direct_for(&self, subscriber: SubscriberId) -> Vec<RoomsSnapshot> {
        self.events
            .lock()
            .await
            .iter()
            .filter_map(|e| match e {
                OutputEvent::Direct(id, snapshot) if *id == subscriber => Some(snapshot.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Default for MockSnapshotOutput {
    fn default() -> Self {
        Self::new_stored_only()
    }
}

#[async_trait]
impl SnapshotOutput for MockSnapshotOutput {
    async fn broadcast(&self, snapshot: &RoomsSnapshot) {
        tracing::debug!("[MockOutput] broadcast {} rooms", snapshot.rooms.len());

        let event = OutputEvent::Broadcast(snapshot.clone());
        self.events.lock().await.push(event.clone());
        let _ = self.tx.send(event);
    }

    async fn send_to(&self, subscriber: SubscriberId, snapshot: &RoomsSnapshot) {
        tracing::debug!("[MockOutput] send_to {}", subscriber);

        let event = OutputEvent::Direct(subscriber, snapshot.clone());
        self.events.lock().await.push(event.clone());
        let _ = self.tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_output_captures_broadcast() {
        let (output, mut rx) = MockSnapshotOutput::new();

        output.broadcast(&RoomsSnapshot::default()).await;

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, OutputEvent::Broadcast(_)));
        assert_eq!(output.broadcast_count().await, 1);
    }

    #[tokio::test]
    async fn test_mock_output_captures_direct_send() {
        let output = MockSnapshotOutput::new_stored_only();
        let subscriber = SubscriberId::new();

        output.send_to(subscriber, &RoomsSnapshot::default()).await;

        assert_eq!(output.direct_for(subscriber).await.len(), 1);
        assert_eq!(output.broadcast_count().await, 0);
    }
}
