use std::time::Duration;

use crate::protocol::HANDSHAKE_TOKEN;

/// Side length of the playable board; coordinates run from 1 to this value.
pub const BOARD_SIZE: u8 = 10;

/// Port used by the binaries when none is given.
pub const DEFAULT_PORT: u16 = 8080;

/// Carrier, battleship, cruiser, submarine, destroyer.
pub const DEFAULT_SHIP_SIZES: [u8; 5] = [5, 4, 3, 3, 2];

/// Per-session knobs for [`TurnEngine`](crate::TurnEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Sentinel both peers must exchange before the first attack.
    pub handshake_token: u8,
    /// Upper bound on any single read from the peer. `None` waits forever.
    pub read_timeout: Option<Duration>,
}

impl EngineConfig {
    pub fn with_handshake_token(mut self, token: u8) -> Self {
        self.handshake_token = token;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            handshake_token: HANDSHAKE_TOKEN,
            read_timeout: None,
        }
    }
}
