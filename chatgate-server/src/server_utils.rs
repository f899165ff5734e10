use anyhow::Result;
use listenfd::ListenFd;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{IpAddr, SocketAddr};
use tokio::signal;
use tracing::{info, warn};

pub async fn create_listener(host: &str, port: u16) -> Result<tokio::net::TcpListener> {
    let mut listenfd = ListenFd::from_env();

    if let Some(listener) = listenfd.take_tcp_listener(0)? {
        info!("Using systemd socket activation (fd=3)");
        listener.set_nonblocking(true)?;
        return Ok(tokio::net::TcpListener::from_std(listener)?);
    }

    let ip: IpAddr =
        host.parse().map_err(|e| anyhow::anyhow!("Invalid bind address '{}': {}", host, e))?;
    let addr = SocketAddr::new(ip, port);
    let domain = if addr.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(1024)?;

    Ok(tokio::net::TcpListener::from_std(socket.into())?)
}

/// Resolves on Ctrl+C or SIGTERM. A handler that cannot be installed is
/// logged and never fires, leaving the other one in charge.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            },
            Err(e) => {
                warn!("SIGTERM handler unavailable: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let received = tokio::select! {
        () = ctrl_c => "SIGINT",
        () = terminate => "SIGTERM",
    };
    info!(signal = received, "Shutting down, waiting for in-flight completions");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_listener_binds_ephemeral_port() {
        let listener = match create_listener("127.0.0.1", 0).await {
            Ok(listener) => listener,
            Err(error) => panic!("bind failed: {}", error),
        };
        let addr = listener.local_addr().unwrap_or_else(|e| panic!("no local addr: {}", e));
        assert!(addr.port() > 0);
    }

    #[tokio::test]
    async fn test_create_listener_rejects_bad_host() {
        assert!(create_listener("not-an-ip", 0).await.is_err());
    }

    #[tokio::test]
    async fn test_shutdown_signal_waits_for_a_signal() {
        let waited =
            tokio::time::timeout(std::time::Duration::from_millis(50), shutdown_signal()).await;
        assert!(waited.is_err());
    }
}
