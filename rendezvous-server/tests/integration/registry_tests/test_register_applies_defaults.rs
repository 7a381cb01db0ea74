use rendezvous_core::RoomRegistration;
use rendezvous_server::{LobbyConfig, LobbyError};

use crate::integration::{create_test_lobby, init_tracing};

#[tokio::test]
async fn test_register_applies_defaults() {
    init_tracing();

    let (lobby, output) = create_test_lobby(LobbyConfig::default());

    lobby
        .register_room(RoomRegistration::new("r1"))
        .await
        .expect("register failed");

    let rooms = lobby.list_rooms().await.expect("list failed");
    let matching: Vec<_> = rooms.iter().filter(|r| r.room_id.as_str() == "r1").collect();
    assert_eq!(matching.len(), 1);

    let room = matching[0];
    assert_eq!(room.name, "r1");
    assert!(room.is_public);
    assert_eq!(room.max_players, 4);
    assert_eq!(room.players, 1);
    assert_eq!(room.mode, "P2P");
    assert_eq!(room.join_code, None);

    // Registration is a list-changing mutation.
    assert_eq!(output.broadcast_count().await, 1);
    let pushed = output.last_broadcast().await.expect("no broadcast");
    assert!(pushed.find("r1").is_some());
}

#[tokio::test]
async fn test_register_without_room_id_is_rejected() {
    init_tracing();

    let (lobby, output) = create_test_lobby(LobbyConfig::default());

    let result = lobby.register_room(RoomRegistration::default()).await;

    assert!(matches!(result, Err(LobbyError::Validation(_))));
    assert!(lobby.list_rooms().await.unwrap().is_empty());
    assert_eq!(output.broadcast_count().await, 0);
}
