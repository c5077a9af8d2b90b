//! Fleet board and shot log used by the bundled players.
//!
//! Rows and columns are 1-based, matching the playable range carried in
//! [`Coordinates`]. Anything outside `1..=BOARD_SIZE` is open water.

use core::fmt::Write as _;

use rand::Rng;

use crate::config::BOARD_SIZE;
use crate::protocol::{AttackResponse, Coordinates};

const N: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Errors returned by board placement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("ship of size {size} does not fit on the board at {origin}")]
    ShipOutOfBounds { size: u8, origin: Coordinates },
    #[error("ship placement overlaps with another ship")]
    ShipOverlaps,
    #[error("unable to place ship of size {0}")]
    UnableToPlaceShip(u8),
}

#[derive(Debug, Clone)]
struct PlacedShip {
    size: u8,
    hits: u8,
}

impl PlacedShip {
    fn is_disabled(&self) -> bool {
        self.hits >= self.size
    }
}

/// The local fleet: ship positions and the peer's shots against them.
#[derive(Debug, Clone)]
pub struct Board {
    ships: Vec<PlacedShip>,
    occupant: [[Option<usize>; N]; N],
    struck: [[bool; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            ships: Vec::new(),
            occupant: [[None; N]; N],
            struck: [[false; N]; N],
        }
    }

    /// Place a fleet at random, returning the sizes that could not be placed.
    pub fn random<R: Rng>(rng: &mut R, sizes: impl IntoIterator<Item = u8>) -> (Self, Vec<BoardError>) {
        let mut board = Self::new();
        let mut failures = Vec::new();
        for size in sizes {
            if let Err(e) = board.place_random(rng, size) {
                failures.push(e);
            }
        }
        (board, failures)
    }

    /// Place a ship with its first cell at `origin`, extending right or down.
    pub fn place(&mut self, size: u8, origin: Coordinates, orientation: Orientation) -> Result<(), BoardError> {
        let cells = cells_of(size, origin, orientation).ok_or(BoardError::ShipOutOfBounds { size, origin })?;
        if cells.iter().any(|&(r, c)| self.occupant[r][c].is_some()) {
            return Err(BoardError::ShipOverlaps);
        }
        let index = self.ships.len();
        for (r, c) in cells {
            self.occupant[r][c] = Some(index);
        }
        self.ships.push(PlacedShip { size, hits: 0 });
        Ok(())
    }

    /// Try random non-overlapping positions for one ship.
    pub fn place_random<R: Rng>(&mut self, rng: &mut R, size: u8) -> Result<(), BoardError> {
        if size as usize > N {
            return Err(BoardError::UnableToPlaceShip(size));
        }
        let span = (size as usize).max(1);
        for _ in 0..100 {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_v, max_h) = match orientation {
                Orientation::Horizontal => (N, N + 1 - span),
                Orientation::Vertical => (N + 1 - span, N),
            };
            let v = rng.random_range(1..=max_v) as u8;
            let h = rng.random_range(1..=max_h) as u8;
            let Ok(origin) = Coordinates::new(v, h) else {
                continue;
            };
            match self.place(size, origin, orientation) {
                Ok(()) => return Ok(()),
                Err(BoardError::ShipOverlaps) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::UnableToPlaceShip(size))
    }

    /// Resolve a shot. Repeated or off-board shots miss; sinking the last ship ends the game.
    pub fn receive_attack(&mut self, target: Coordinates) -> AttackResponse {
        let Some((r, c)) = index_of(target) else {
            return self.verdict(AttackResponse::Missed);
        };
        if self.struck[r][c] {
            return self.verdict(AttackResponse::Missed);
        }
        self.struck[r][c] = true;
        let Some(i) = self.occupant[r][c] else {
            return self.verdict(AttackResponse::Missed);
        };
        let ship = &mut self.ships[i];
        ship.hits += 1;
        if ship.is_disabled() {
            self.verdict(AttackResponse::DisabledShip)
        } else {
            AttackResponse::Hit
        }
    }

    // A fleet with nothing left afloat answers every shot with GAME_END.
    fn verdict(&self, response: AttackResponse) -> AttackResponse {
        if self.all_disabled() {
            AttackResponse::GameEnd
        } else {
            response
        }
    }

    pub fn all_disabled(&self) -> bool {
        self.ships.iter().all(PlacedShip::is_disabled)
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_disabled()).count()
    }

    pub fn occupied(&self, target: Coordinates) -> bool {
        index_of(target).is_some_and(|(r, c)| self.occupant[r][c].is_some())
    }

    /// Text grid: `S` ship, `X` hit ship, `o` miss, `.` water.
    pub fn render(&self) -> String {
        render_grid(|r, c| match (self.occupant[r][c].is_some(), self.struck[r][c]) {
            (true, true) => 'X',
            (true, false) => 'S',
            (false, true) => 'o',
            (false, false) => '.',
        })
    }
}

/// What we know about the peer's board from our own attacks.
#[derive(Debug, Clone)]
pub struct ShotLog {
    results: [[Option<AttackResponse>; N]; N],
}

impl Default for ShotLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ShotLog {
    pub fn new() -> Self {
        Self {
            results: [[None; N]; N],
        }
    }

    pub fn record(&mut self, target: Coordinates, response: AttackResponse) {
        if let Some((r, c)) = index_of(target) {
            self.results[r][c] = Some(response);
        }
    }

    pub fn result(&self, target: Coordinates) -> Option<AttackResponse> {
        index_of(target).and_then(|(r, c)| self.results[r][c])
    }

    pub fn tried(&self, target: Coordinates) -> bool {
        self.result(target).is_some()
    }

    /// Playable cells not yet attacked, row by row.
    pub fn untried(&self) -> Vec<Coordinates> {
        playable_cells().filter(|&c| !self.tried(c)).collect()
    }

    /// Text grid: `X` hit, `#` disabled ship, `o` miss, `.` unknown.
    pub fn render(&self) -> String {
        render_grid(|r, c| match self.results[r][c] {
            Some(AttackResponse::Hit) => 'X',
            Some(AttackResponse::DisabledShip) | Some(AttackResponse::GameEnd) => '#',
            Some(AttackResponse::Missed) => 'o',
            None => '.',
        })
    }
}

/// Every cell in `1..=BOARD_SIZE` on both axes.
pub fn playable_cells() -> impl Iterator<Item = Coordinates> {
    (1..=BOARD_SIZE).flat_map(|v| (1..=BOARD_SIZE).filter_map(move |h| Coordinates::new(v, h).ok()))
}

fn index_of(target: Coordinates) -> Option<(usize, usize)> {
    let (v, h) = (target.vertical() as usize, target.horizontal() as usize);
    if (1..=N).contains(&v) && (1..=N).contains(&h) {
        Some((v - 1, h - 1))
    } else {
        None
    }
}

fn cells_of(size: u8, origin: Coordinates, orientation: Orientation) -> Option<Vec<(usize, usize)>> {
    let (r, c) = index_of(origin)?;
    let len = size as usize;
    let (end_r, end_c) = match orientation {
        Orientation::Horizontal => (r, c + len.saturating_sub(1)),
        Orientation::Vertical => (r + len.saturating_sub(1), c),
    };
    if end_r >= N || end_c >= N {
        return None;
    }
    Some(
        (0..len)
            .map(|i| match orientation {
                Orientation::Horizontal => (r, c + i),
                Orientation::Vertical => (r + i, c),
            })
            .collect(),
    )
}

fn render_grid(cell: impl Fn(usize, usize) -> char) -> String {
    let mut out = String::from("    ");
    for c in 0..N {
        out.push(' ');
        out.push((b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..N {
        let _ = write!(out, "  {:2}", r + 1);
        for c in 0..N {
            out.push(' ');
            out.push(cell(r, c));
        }
        out.push('\n');
    }
    out
}
