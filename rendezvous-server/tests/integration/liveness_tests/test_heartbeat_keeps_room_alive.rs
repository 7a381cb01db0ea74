use rendezvous_core::RoomRegistration;
use std::time::Duration;

use super::{advance, liveness_config};
use crate::integration::{create_test_lobby, init_tracing};

#[tokio::test(start_paused = true)]
async fn test_heartbeat_keeps_room_alive() {
    init_tracing();

    let (lobby, output) = create_test_lobby(liveness_config());
    lobby
        .register_room(RoomRegistration::new("r1"))
        .await
        .unwrap();

    advance(Duration::from_secs(25)).await;
    lobby.heartbeat("r1", None).await.unwrap();

    // 40s after registration but only 15s after the heartbeat.
    advance(Duration::from_secs(15)).await;
    let rooms = lobby.list_rooms().await.unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(output.broadcast_count().await, 2);

    // 35s after the heartbeat.
    advance(Duration::from_secs(20)).await;
    assert!(lobby.list_rooms().await.unwrap().is_empty());
    assert_eq!(output.broadcast_count().await, 3);
}

#[tokio::test(start_paused = true)]
async fn test_evicted_room_can_be_registered_again() {
    init_tracing();

    let (lobby, _output) = create_test_lobby(liveness_config());
    lobby
        .register_room(RoomRegistration::new("r1"))
        .await
        .unwrap();

    advance(Duration::from_secs(45)).await;
    assert!(lobby.list_rooms().await.unwrap().is_empty());

    lobby
        .register_room(RoomRegistration::new("r1"))
        .await
        .unwrap();
    assert_eq!(lobby.list_rooms().await.unwrap().len(), 1);
}
