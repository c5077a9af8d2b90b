//! Player trait and implementations
//!
//! The [`TurnEngine`](crate::TurnEngine) knows nothing about boards or user
//! input; it asks a [`Player`] for game decisions and blocks until it answers.
//! - AiPlayer: random fleet, hunt/target attacks
//! - CliPlayer: interactive console player

use crate::protocol::{AttackResponse, Coordinates, ShipSizes};

/// Game semantics supplied to the turn engine.
pub trait Player: Send {
    /// Set up the local board for the agreed fleet.
    fn initialize_board(&mut self, ship_sizes: &ShipSizes);

    /// Choose the next target.
    fn attack(&mut self) -> Coordinates;

    /// Resolve an incoming attack against the local board.
    fn respond_to_attack(&mut self, target: Coordinates) -> AttackResponse;

    /// Learn the peer's verdict on our last attack.
    fn process_attack_result(&mut self, target: Coordinates, response: AttackResponse);
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn initialize_board(&mut self, ship_sizes: &ShipSizes) {
        (**self).initialize_board(ship_sizes)
    }

    fn attack(&mut self) -> Coordinates {
        (**self).attack()
    }

    fn respond_to_attack(&mut self, target: Coordinates) -> AttackResponse {
        (**self).respond_to_attack(target)
    }

    fn process_attack_result(&mut self, target: Coordinates, response: AttackResponse) {
        (**self).process_attack_result(target, response)
    }
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;
