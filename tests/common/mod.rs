#![allow(dead_code)]

use mock_backend::server;
use std::net::SocketAddr;

/// Starts the server on an ephemeral localhost port and returns its address.
pub async fn spawn_server() -> SocketAddr {
    let listener = server::bind("127.0.0.1:0".parse().unwrap())
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(server::serve(listener));

    addr
}

pub fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{addr}{path}")
}
