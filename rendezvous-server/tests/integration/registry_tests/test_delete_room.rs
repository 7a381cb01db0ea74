use rendezvous_core::RoomRegistration;
use rendezvous_server::LobbyConfig;

use crate::integration::{create_test_lobby, init_tracing};

#[tokio::test]
async fn test_delete_missing_room_is_silent_noop() {
    init_tracing();

    let (lobby, output) = create_test_lobby(LobbyConfig::default());

    let removed = lobby.delete_room("ghost").await.expect("delete failed");

    assert!(!removed);
    assert_eq!(output.broadcast_count().await, 0);
}

#[tokio::test]
async fn test_delete_existing_room() {
    init_tracing();

    let (lobby, output) = create_test_lobby(LobbyConfig::default());
    lobby
        .register_room(RoomRegistration::new("r1"))
        .await
        .unwrap();
    lobby
        .register_room(RoomRegistration::new("r2"))
        .await
        .unwrap();

    assert!(lobby.delete_room("r1").await.unwrap());
    assert!(!lobby.delete_room("r1").await.unwrap());

    let rooms = lobby.list_rooms().await.unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].room_id.as_str(), "r2");

    // Two registrations and one effective delete.
    assert_eq!(output.broadcast_count().await, 3);
    let pushed = output.last_broadcast().await.unwrap();
    assert!(pushed.find("r1").is_none());
}
