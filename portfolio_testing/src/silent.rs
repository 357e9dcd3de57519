use std::net::Ipv4Addr;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::trace;
use url::Url;

/// Starts a server that accepts connections but never answers, so every
/// request against it runs into the client's timeout.
pub async fn spawn() -> anyhow::Result<Url> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .context("Failed to bind silent server")?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let mut connections = Vec::new();
        while let Ok((stream, peer)) = listener.accept().await {
            trace!(%peer, "holding connection");
            connections.push(stream);
        }
    });

    format!("http://{addr}/")
        .parse()
        .context("Failed to build silent server url")
}
