use async_trait::async_trait;
use rendezvous_core::{RoomsSnapshot, SubscriberId};

/// Where the lobby pushes room-list snapshots.
///
/// Implementations must not block: the lobby awaits these calls inside its
/// event loop, so delivery has to be queued, never awaited per connection.
#[async_trait]
pub trait SnapshotOutput: Send + Sync {
    /// Send the snapshot to every open subscriber.
    async fn broadcast(&self, snapshot: &RoomsSnapshot);

    /// Send the snapshot to one subscriber only (initial sync).
    async fn send_to(&self, subscriber: SubscriberId, snapshot: &RoomsSnapshot);
}
