//! Wire protocol: message types and their fixed-size binary encodings.
//!
//! ```text
//! GameConfig:      [u8 N][u8 x N]
//! Handshake:       [u8]            canonical 0xFF
//! Attack:          [u8]            (vertical << 4) | horizontal
//! AttackResponse:  [u8]            1=MISSED 2=HIT 3=DISABLED_SHIP 255=GAME_END
//! ```

pub mod codec;
pub mod domain;

pub use codec::*;
pub use domain::{AttackResponse, Coordinates, ShipSizes};

/// Canonical handshake sentinel.
pub const HANDSHAKE_TOKEN: u8 = 0xFF;

/// Largest value a coordinate component may take on the wire.
pub const COORDINATE_MAX: u8 = 0x0F;

/// Largest number of ships a game configuration can describe.
pub const MAX_SHIPS: usize = u8::MAX as usize;
