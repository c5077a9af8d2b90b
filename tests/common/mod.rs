#![allow(dead_code)]

use std::collections::VecDeque;

use broadside::{AttackResponse, Coordinates, Player, ShipSizes};

/// Everything the engine asked of a [`ScriptedPlayer`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Initialized(Vec<u8>),
    Attacked(Coordinates),
    Defended(Coordinates, AttackResponse),
    Result(Coordinates, AttackResponse),
}

/// Player that replays canned attacks and verdicts.
#[derive(Debug, Default)]
pub struct ScriptedPlayer {
    attacks: VecDeque<Coordinates>,
    verdicts: VecDeque<AttackResponse>,
    pub events: Vec<Event>,
}

impl ScriptedPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attacking(mut self, targets: &[(u8, u8)]) -> Self {
        self.attacks
            .extend(targets.iter().map(|&(v, h)| Coordinates::new(v, h).unwrap()));
        self
    }

    pub fn answering(mut self, verdicts: &[AttackResponse]) -> Self {
        self.verdicts.extend(verdicts.iter().copied());
        self
    }

    pub fn attack_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Attacked(_)))
            .count()
    }
}

impl Player for ScriptedPlayer {
    fn initialize_board(&mut self, ship_sizes: &ShipSizes) {
        self.events.push(Event::Initialized(ship_sizes.as_slice().to_vec()));
    }

    fn attack(&mut self) -> Coordinates {
        let target = self
            .attacks
            .pop_front()
            .unwrap_or_else(|| Coordinates::new(1, 1).unwrap());
        self.events.push(Event::Attacked(target));
        target
    }

    fn respond_to_attack(&mut self, target: Coordinates) -> AttackResponse {
        let verdict = self.verdicts.pop_front().unwrap_or(AttackResponse::Missed);
        self.events.push(Event::Defended(target, verdict));
        verdict
    }

    fn process_attack_result(&mut self, target: Coordinates, response: AttackResponse) {
        self.events.push(Event::Result(target, response));
    }
}

pub fn coords(v: u8, h: u8) -> Coordinates {
    Coordinates::new(v, h).unwrap()
}
