use rendezvous_core::RoomRegistration;
use rendezvous_server::LobbyConfig;

use crate::integration::{create_test_lobby, init_tracing};

const CLIENTS: usize = 32;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations() {
    init_tracing();

    let (lobby, output) = create_test_lobby(LobbyConfig::default());

    let mut tasks = Vec::new();
    for i in 0..CLIENTS {
        let lobby = lobby.clone();
        tasks.push(tokio::spawn(async move {
            // Every client registers its own room and also fights over a shared one.
            lobby
                .register_room(RoomRegistration::new(format!("room-{i}")))
                .await
                .unwrap();
            lobby
                .register_room(RoomRegistration {
                    name: Some(format!("owner-{i}")),
                    ..RoomRegistration::new("shared")
                })
                .await
                .unwrap();
            lobby.heartbeat("shared", Some(2)).await.unwrap();
        }));
    }

    for task in tasks {
        task.await.expect("client task panicked");
    }

    let rooms = lobby.list_rooms().await.unwrap();
    assert_eq!(rooms.len(), CLIENTS + 1);
    assert_eq!(
        rooms.iter().filter(|r| r.room_id.as_str() == "shared").count(),
        1
    );
    assert_eq!(output.broadcast_count().await, CLIENTS * 3);
}
