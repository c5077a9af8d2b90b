//! Two-player battleship over a single byte stream.
//!
//! [`TurnEngine`] runs the handshake and the attack loop against any tokio
//! stream, asking a [`Player`] for every game decision. The wire format lives
//! in [`protocol`]; stream handling and TCP bootstrap live in [`transport`].

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
mod logging;
pub mod player;
pub mod protocol;
pub mod sim;
pub mod transport;

pub use board::{Board, BoardError, Orientation, ShotLog};
pub use config::*;
pub use engine::{GameSummary, Outcome, Role, Turn, TurnEngine};
pub use error::{DecodeError, EncodeError, GameError};
pub use logging::init_logging;
pub use player::{AiPlayer, CliPlayer, Player};
pub use protocol::{AttackResponse, Coordinates, ShipSizes, HANDSHAKE_TOKEN};
pub use sim::play_local;
pub use transport::Connection;
