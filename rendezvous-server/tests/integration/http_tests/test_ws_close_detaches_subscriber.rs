use futures::{SinkExt, StreamExt};
use rendezvous_server::{LobbyConfig, SubscriberHub};
use tokio_tungstenite::connect_async;

use crate::integration::init_tracing;
use crate::utils::{TestServer, network_timeout, next_snapshot};

async fn wait_for_subscribers(hub: &SubscriberHub, expected: usize) {
    tokio::time::timeout(network_timeout(), async {
        while hub.len() != expected {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap_or_else(|_| panic!("hub never reached {expected} subscribers, has {}", hub.len()));
}

#[tokio::test]
async fn test_ws_close_detaches_subscriber() {
    init_tracing();

    let server = TestServer::start(LobbyConfig::default())
        .await
        .expect("Failed to start server");
    let hub = server.state.hub.clone();

    let (closing, _) = connect_async(server.ws_url("/rooms")).await.unwrap();
    let (mut closing_write, mut closing_read) = closing.split();
    next_snapshot(&mut closing_read).await;

    let (dropped, _) = connect_async(server.ws_url("/ws/rooms")).await.unwrap();
    let (dropped_write, mut dropped_read) = dropped.split();
    next_snapshot(&mut dropped_read).await;

    assert_eq!(hub.len(), 2);

    // Clean close handshake.
    closing_write.close().await.expect("close failed");
    wait_for_subscribers(&hub, 1).await;

    // Connection torn down without a close frame.
    drop(dropped_write);
    drop(dropped_read);
    wait_for_subscribers(&hub, 0).await;

    assert!(hub.is_empty());
}
