//! Keepalive HTTP endpoint: answers every request with a static liveness
//! string so hosting platforms consider the process healthy. Shares nothing
//! with the core beyond process liveness.

use crate::constants::KEEPALIVE_BODY;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

/// Accept loop bound to `0.0.0.0:port`. Runs for the life of the process.
pub async fn run(port: u16) {
    let listener = match TcpListener::bind(("0.0.0.0", port)).await {
        Ok(l) => l,
        Err(e) => {
            warn!(target: "keepalive", port, error = %e, "failed to bind, keepalive disabled");
            return;
        }
    };
    info!(target: "keepalive", port, "keepalive listening");
    loop {
        let (mut stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!(target: "keepalive", error = %e, "accept failed");
                continue;
            }
        };
        tokio::spawn(async move {
            // Drain whatever request line arrives, then answer statically.
            let mut buf = [0u8; 1024];
            stream.read(&mut buf).await.ok();
            let body = KEEPALIVE_BODY.as_bytes();
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            if stream.write_all(response.as_bytes()).await.is_ok() {
                stream.write_all(body).await.ok();
            }
            debug!(target: "keepalive", peer = %peer, "served liveness check");
        });
    }
}
