//! HTTP server initialization and runtime setup.
//!
//! Binding is kept separate from serving so the same router can be run on an
//! already-bound listener (tests use an ephemeral port).

use crate::config::LISTEN_PORT;
use crate::error::ServerError;
use crate::routes::app_router;

use std::io::ErrorKind;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::TcpListener;

/// Wildcard addresses for `port`, in bind order: IPv6 `[::]` first, which
/// also accepts IPv4 on a dual-stack host, then IPv4 `0.0.0.0`.
pub fn listen_addrs(port: u16) -> [SocketAddr; 2] {
    [
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, port)),
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
    ]
}

/// Binds a TCP listener on `addr`.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address is in use or cannot be
/// bound. The bind is not retried.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Binds `port` on all interfaces.
///
/// Tries the IPv6 wildcard first and falls back to the IPv4 wildcard only
/// when the host has no usable IPv6 stack. A port that is taken or
/// privileged fails immediately.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] for the last address attempted.
pub async fn bind_all_interfaces(port: u16) -> Result<TcpListener, ServerError> {
    let [v6, v4] = listen_addrs(port);

    match bind(v6).await {
        Ok(listener) => Ok(listener),
        Err(ServerError::Bind { source, .. })
            if !matches!(
                source.kind(),
                ErrorKind::AddrInUse | ErrorKind::PermissionDenied
            ) =>
        {
            tracing::debug!("IPv6 bind on {v6} failed ({source}), falling back to {v4}");
            bind(v4).await
        }
        Err(e) => Err(e),
    }
}

/// Serves the catch-all router on `listener`.
///
/// Each connection is handled on its own task, so a request sitting in its
/// delay never holds up the others.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] if `axum::serve` returns an I/O error.
/// Accept errors are logged and retried inside axum, so in practice this
/// future never completes.
pub async fn serve(listener: TcpListener) -> Result<(), ServerError> {
    axum::serve(listener, app_router())
        .await
        .map_err(ServerError::Serve)
}

/// Binds port 8080 on all interfaces, announces it on stdout and serves forever.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the port cannot be bound.
pub async fn run() -> Result<(), ServerError> {
    let listener = bind_all_interfaces(LISTEN_PORT).await?;

    println!("Mock backend listening on :{LISTEN_PORT}");
    if let Ok(addr) = listener.local_addr() {
        tracing::debug!("Accepting connections on {addr}");
    }

    serve(listener).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    async fn get_root(addr: SocketAddr) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[test]
    fn test_listen_addrs_are_wildcards() {
        let [v6, v4] = listen_addrs(LISTEN_PORT);

        assert_eq!(v6, "[::]:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(v4, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert!(v6.ip().is_unspecified() && v4.ip().is_unspecified());
    }

    #[tokio::test]
    async fn test_bind_conflict_is_reported() {
        let first = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let taken = first.local_addr().unwrap();

        let second = bind(taken).await;

        match second {
            Err(ServerError::Bind { addr, .. }) => assert_eq!(addr, taken),
            other => panic!("expected bind error, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_all_interfaces_accepts_ipv4_and_ipv6() {
        let listener = bind_all_interfaces(0).await.unwrap();
        let local = listener.local_addr().unwrap();
        tokio::spawn(serve(listener));

        let v4 = get_root(SocketAddr::from((Ipv4Addr::LOCALHOST, local.port()))).await;
        assert!(v4.starts_with("HTTP/1.1 200 OK"), "{v4}");
        assert!(v4.ends_with("ok"), "{v4}");

        // Hosts without IPv6 end up on the 0.0.0.0 fallback.
        if local.is_ipv6() {
            let v6 = get_root(SocketAddr::from((Ipv6Addr::LOCALHOST, local.port()))).await;
            assert!(v6.starts_with("HTTP/1.1 200 OK"), "{v6}");
            assert!(v6.ends_with("ok"), "{v6}");
        }
    }

    #[tokio::test]
    async fn test_all_interfaces_does_not_fall_back_when_port_taken() {
        let first = bind_all_interfaces(0).await.unwrap();
        let port = first.local_addr().unwrap().port();

        let second = bind_all_interfaces(port).await;

        match second {
            Err(ServerError::Bind { source, .. }) => {
                assert_eq!(source.kind(), ErrorKind::AddrInUse)
            }
            other => panic!("expected bind error, got {other:?}"),
        }
    }
}
