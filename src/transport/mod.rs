//! One end of the game's byte stream.
//!
//! [`Connection`] performs exact-length reads and whole writes over any tokio
//! stream and maps I/O failures onto [`GameError`]. A close, reset or early
//! EOF becomes [`GameError::ConnectionClosed`]; a read timeout or any other
//! read failure becomes [`GameError::ProtocolDecode`].

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::{timeout, Duration};

use crate::error::{DecodeError, GameError};
use crate::protocol::{self, AttackResponse, Coordinates, ShipSizes};

pub mod in_memory;
pub mod tcp;

pub struct Connection<S> {
    stream: Option<S>,
    read_timeout: Option<Duration>,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream: Some(stream),
            read_timeout: None,
        }
    }

    pub fn with_read_timeout(stream: S, read_timeout: Option<Duration>) -> Self {
        Self {
            stream: Some(stream),
            read_timeout,
        }
    }

    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// Shut down the write half and drop the stream. Idempotent.
    pub async fn close(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            if let Err(e) = stream.shutdown().await {
                tracing::debug!(error = %e, "shutdown on close failed");
            }
        }
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), GameError> {
        let stream = self.stream.as_mut().ok_or(GameError::ConnectionClosed)?;
        stream.write_all(bytes).await.map_err(GameError::from_write)?;
        stream.flush().await.map_err(GameError::from_write)
    }

    async fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), GameError> {
        let read_timeout = self.read_timeout;
        let stream = self.stream.as_mut().ok_or(GameError::ConnectionClosed)?;
        let result = match read_timeout {
            Some(limit) => timeout(limit, stream.read_exact(buf))
                .await
                .map_err(|_| GameError::ProtocolDecode(DecodeError::ReadTimeout(limit)))?,
            None => stream.read_exact(buf).await,
        };
        result.map(|_| ()).map_err(GameError::from_read)
    }

    async fn read_byte(&mut self) -> Result<u8, GameError> {
        let mut byte = [0u8; 1];
        self.read_exact(&mut byte).await?;
        Ok(byte[0])
    }

    pub async fn send_config(&mut self, ship_sizes: &ShipSizes) -> Result<(), GameError> {
        self.write_all(&protocol::encode_config(ship_sizes)).await
    }

    /// Reads the count byte, then exactly that many sizes.
    pub async fn recv_config(&mut self) -> Result<ShipSizes, GameError> {
        let count = self.read_byte().await?;
        let mut message = vec![0u8; 1 + count as usize];
        message[0] = count;
        self.read_exact(&mut message[1..]).await?;
        Ok(protocol::decode_config(&message)?)
    }

    pub async fn send_handshake(&mut self, token: u8) -> Result<(), GameError> {
        self.write_all(&protocol::encode_handshake(token)).await
    }

    pub async fn recv_handshake(&mut self) -> Result<u8, GameError> {
        self.read_byte().await
    }

    pub async fn send_attack(&mut self, target: Coordinates) -> Result<(), GameError> {
        self.write_all(&[protocol::encode_attack(target)]).await
    }

    pub async fn recv_attack(&mut self) -> Result<Coordinates, GameError> {
        Ok(protocol::decode_attack(self.read_byte().await?))
    }

    pub async fn send_response(&mut self, response: AttackResponse) -> Result<(), GameError> {
        self.write_all(&[protocol::encode_response(response)]).await
    }

    pub async fn recv_response(&mut self) -> Result<AttackResponse, GameError> {
        Ok(protocol::decode_response(self.read_byte().await?)?)
    }
}
