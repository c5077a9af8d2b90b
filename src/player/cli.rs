use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, ShotLog};
use crate::config::BOARD_SIZE;
use crate::protocol::{AttackResponse, Coordinates, ShipSizes};

use super::Player;

/// Interactive console player.
///
/// The fleet is placed at random and incoming attacks are resolved against
/// it automatically; only the choice of target is left to the human. An empty
/// line (or a closed input) fires at a random untried cell.
pub struct CliPlayer<R = BufReader<Stdin>, W = Stdout> {
    input: R,
    output: W,
    rng: SmallRng,
    board: Board,
    shots: ShotLog,
}

impl CliPlayer {
    /// Reads targets from stdin and prints to stdout.
    pub fn stdio(seed: u64) -> Self {
        Self::seeded(BufReader::new(io::stdin()), io::stdout(), seed)
    }
}

impl<R, W> CliPlayer<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn with_io(input: R, output: W, rng: SmallRng) -> Self {
        Self {
            input,
            output,
            rng,
            board: Board::new(),
            shots: ShotLog::new(),
        }
    }

    pub fn seeded(input: R, output: W, seed: u64) -> Self {
        Self::with_io(input, output, SmallRng::seed_from_u64(seed))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn show(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text).and_then(|_| self.output.flush()) {
            tracing::debug!(error = %e, "console write failed");
        }
    }

    fn suggestion(&mut self) -> Coordinates {
        let untried = self.shots.untried();
        if untried.is_empty() {
            return Coordinates::from_nibbles(0x11);
        }
        untried[self.rng.random_range(0..untried.len())]
    }

    fn print_boards(&mut self) {
        let view = format!(
            "Opponent board:\n{}    Legend: X=Hit  #=Disabled  o=Miss  .=Unknown\n\nYour board:\n{}    Legend: S=Ship  X=Hit  o=Miss  .=Water",
            self.shots.render(),
            self.board.render()
        );
        self.show(&view);
    }
}

/// Render a target in board notation, e.g. `C7`.
pub fn target_to_string(target: Coordinates) -> String {
    let column = target.horizontal();
    if (1..=BOARD_SIZE).contains(&column) {
        format!("{}{}", (b'A' + column - 1) as char, target.vertical())
    } else {
        target.to_string()
    }
}

/// Parse board notation: column letter A-J, then row 1-10.
pub fn parse_target(input: &str) -> Result<Coordinates, String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let column = (col_ch as u8 - b'A') + 1;
    if column > BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: u8 = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Coordinates::new(row, column).map_err(|e| e.to_string())
}

impl<R, W> Player for CliPlayer<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn initialize_board(&mut self, ship_sizes: &ShipSizes) {
        let (board, failures) = Board::random(&mut self.rng, ship_sizes.iter());
        self.board = board;
        self.shots = ShotLog::new();
        self.show(&format!(
            "Fleet ready: {} ship(s) of sizes [{}]",
            self.board.ship_count(),
            ship_sizes
        ));
        for failure in failures {
            self.show(&format!("Warning: {}", failure));
        }
    }

    fn attack(&mut self) -> Coordinates {
        self.print_boards();
        let suggestion = self.suggestion();
        loop {
            let prompt = format!(
                "\nEnter target coordinates [ENTER for {}]: ",
                target_to_string(suggestion)
            );
            if let Err(e) = write!(self.output, "{}", prompt).and_then(|_| self.output.flush()) {
                tracing::debug!(error = %e, "console write failed");
            }
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return suggestion,
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "console read failed, firing at suggestion");
                    return suggestion;
                }
            }
            let line = line.trim();
            if line.is_empty() {
                return suggestion;
            }
            match parse_target(line) {
                Ok(target) if self.shots.tried(target) => {
                    self.show("You already fired there! Choose another target.");
                }
                Ok(target) => return target,
                Err(e) => {
                    self.show(&format!("Invalid coordinate: {}", e));
                    self.show("   Example: A5, B10, J1");
                }
            }
        }
    }

    fn respond_to_attack(&mut self, target: Coordinates) -> AttackResponse {
        let response = self.board.receive_attack(target);
        let at = target_to_string(target);
        let text = match response {
            AttackResponse::Missed => format!("Enemy missed at {}", at),
            AttackResponse::Hit => format!("ENEMY HIT! They struck your ship at {}", at),
            AttackResponse::DisabledShip => format!("SHIP LOST! Enemy disabled your ship at {}", at),
            AttackResponse::GameEnd => format!("DEFEAT. Your last ship went down at {}", at),
        };
        self.show(&text);
        response
    }

    fn process_attack_result(&mut self, target: Coordinates, response: AttackResponse) {
        self.shots.record(target, response);
        let at = target_to_string(target);
        let text = match response {
            AttackResponse::Missed => format!("Miss. Your shot at {} hit only water.", at),
            AttackResponse::Hit => format!("HIT! Your shot at {} struck an enemy ship! Fire again.", at),
            AttackResponse::DisabledShip => format!("DISABLED! Your shot at {} finished off a ship! Fire again.", at),
            AttackResponse::GameEnd => format!("VICTORY! Your shot at {} sank the enemy fleet.", at),
        };
        self.show(&text);
    }
}
