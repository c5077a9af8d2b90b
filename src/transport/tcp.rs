use std::io;

use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};

/// Dial a peer. The dialing side plays the active role.
pub async fn dial<A: ToSocketAddrs>(addr: A) -> io::Result<TcpStream> {
    let stream = TcpStream::connect(addr).await?;
    stream.set_nodelay(true)?;
    tracing::info!(peer = ?stream.peer_addr().ok(), "connected");
    Ok(stream)
}

/// Accept one peer from `listener`. The accepting side plays the passive role.
pub async fn accept(listener: &TcpListener) -> io::Result<TcpStream> {
    let (stream, addr) = listener.accept().await?;
    stream.set_nodelay(true)?;
    tracing::info!(peer = %addr, "accepted connection");
    Ok(stream)
}
