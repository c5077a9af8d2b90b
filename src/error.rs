//! Error types for the wire protocol and the turn engine.

use std::io;
use std::time::Duration;

/// A value that cannot be put on the wire.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The ship count does not fit in the one-byte length prefix.
    #[error("too many ships: {0} (max 255)")]
    TooManyShips(usize),
    /// A coordinate component does not fit in four bits.
    #[error("coordinates ({vertical}, {horizontal}) out of range (max 15)")]
    CoordinatesOutOfRange { vertical: u8, horizontal: u8 },
    /// A ship size list could not be parsed from text.
    #[error("invalid ship size list: {0}")]
    InvalidShipSizes(String),
}

/// A message read from the peer could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unknown attack response byte {0:#04x}")]
    UnknownAttackResponse(u8),
    #[error("wrong message length: expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
    #[error("no data from peer within {0:?}")]
    ReadTimeout(Duration),
    #[error("read failed: {0}")]
    Io(#[source] io::Error),
}

/// Errors surfaced by [`TurnEngine`](crate::TurnEngine) to the hosting application.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The peer's handshake token did not match ours.
    #[error("handshake failed: expected token {expected:#04x}, got {received:#04x}")]
    Handshake { expected: u8, received: u8 },
    #[error("protocol decode error: {0}")]
    ProtocolDecode(#[from] DecodeError),
    /// The peer closed or reset the connection.
    #[error("connection closed by peer")]
    ConnectionClosed,
    #[error("write failed: {0}")]
    Io(#[source] io::Error),
}

impl GameError {
    pub fn is_connection_closed(&self) -> bool {
        matches!(self, GameError::ConnectionClosed)
    }

    /// Classify a failed write.
    pub(crate) fn from_write(err: io::Error) -> Self {
        if is_closed_kind(err.kind()) {
            GameError::ConnectionClosed
        } else {
            GameError::Io(err)
        }
    }

    /// Classify a failed exact-length read.
    pub(crate) fn from_read(err: io::Error) -> Self {
        if is_closed_kind(err.kind()) {
            GameError::ConnectionClosed
        } else {
            GameError::ProtocolDecode(DecodeError::Io(err))
        }
    }
}

fn is_closed_kind(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::UnexpectedEof
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::NotConnected
    )
}
