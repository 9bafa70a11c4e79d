//! tests/global_errors/bind.rs
//! Ensures a second bind on an occupied port fails with an error.

use greetings_api::core::server::bind_listener;
use tokio::net::TcpListener;

#[tokio::test]
async fn second_bind_on_same_port_fails() {
    // Bind an ephemeral port first.
    let first: TcpListener = bind_listener("127.0.0.1:0")
        .await
        .expect("Failed to bind first listener");

    let addr: std::net::SocketAddr = first.local_addr().unwrap();

    // A second bind on the same address must fail while the first
    // listener is alive.
    let second: anyhow::Result<TcpListener> = bind_listener(&addr.to_string()).await;

    assert!(second.is_err());
}
