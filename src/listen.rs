//! Listener setup shared by `dashgate-server` and `dashgate-demo-api`.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::auth_store::write_atomic;

/// Binds `addr` and, when `addr_file` is given, records the address actually
/// bound there. Harnesses start on port 0 and poll that file, so it is
/// replaced in one step and never seen half-written.
pub async fn bind_announced(
    addr: SocketAddr,
    addr_file: Option<&Path>,
) -> Result<(TcpListener, SocketAddr)> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot listen on {}", addr))?;
    let local_addr = listener
        .local_addr()
        .context("listener reported no local address")?;

    if let Some(path) = addr_file {
        write_atomic(path, local_addr.to_string().as_bytes())
            .with_context(|| format!("record bound address in {}", path.display()))?;
    }
    Ok((listener, local_addr))
}

#[cfg(test)]
#[path = "tests/listen_tests.rs"]
mod tests;
