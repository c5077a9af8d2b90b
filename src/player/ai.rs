use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, ShotLog};
use crate::config::BOARD_SIZE;
use crate::protocol::{AttackResponse, Coordinates, ShipSizes};

use super::Player;

/// Computer player: random fleet, hunt/target attacks.
///
/// In hunt mode it fires at a random untried cell. After a hit it queues the
/// hit's neighbours and works through them until the peer reports a disabled
/// ship, then goes back to hunting.
pub struct AiPlayer {
    rng: SmallRng,
    board: Board,
    shots: ShotLog,
    targets: Vec<Coordinates>,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_rng(&mut rand::rng()))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            rng,
            board: Board::new(),
            shots: ShotLog::new(),
            targets: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn shots(&self) -> &ShotLog {
        &self.shots
    }

    fn queue_neighbours(&mut self, hit: Coordinates) {
        let (v, h) = (hit.vertical() as i16, hit.horizontal() as i16);
        for (dv, dh) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let (nv, nh) = (v + dv, h + dh);
            if !(1..=BOARD_SIZE as i16).contains(&nv)
                || !(1..=BOARD_SIZE as i16).contains(&nh)
            {
                continue;
            }
            if let Ok(c) = Coordinates::new(nv as u8, nh as u8) {
                if !self.shots.tried(c) && !self.targets.contains(&c) {
                    self.targets.push(c);
                }
            }
        }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn initialize_board(&mut self, ship_sizes: &ShipSizes) {
        let (board, failures) = Board::random(&mut self.rng, ship_sizes.iter());
        for failure in failures {
            tracing::warn!(error = %failure, "ship left off the board");
        }
        self.board = board;
        self.shots = ShotLog::new();
        self.targets.clear();
    }

    fn attack(&mut self) -> Coordinates {
        while let Some(target) = self.targets.pop() {
            if !self.shots.tried(target) {
                return target;
            }
        }
        let untried = self.shots.untried();
        if untried.is_empty() {
            // Every playable cell has been fired at; repeat the corner.
            return Coordinates::from_nibbles(0x11);
        }
        untried[self.rng.random_range(0..untried.len())]
    }

    fn respond_to_attack(&mut self, target: Coordinates) -> AttackResponse {
        self.board.receive_attack(target)
    }

    fn process_attack_result(&mut self, target: Coordinates, response: AttackResponse) {
        self.shots.record(target, response);
        match response {
            AttackResponse::Hit => self.queue_neighbours(target),
            AttackResponse::DisabledShip => self.targets.clear(),
            AttackResponse::Missed | AttackResponse::GameEnd => {}
        }
    }
}
