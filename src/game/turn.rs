use super::board::Cell;
use super::player::{Player, Profiles};

const MAX_PLAYERS: usize = 2;

/// Whose move it is. A fresh turn points at player 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    current: usize,
    profiles: Profiles,
}

impl Turn {
    pub fn new(profiles: Profiles) -> Self {
        Turn {
            current: 0,
            profiles,
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn player(&self) -> Player {
        Player::ALL[self.current]
    }

    pub fn token(&self) -> Cell {
        self.player().to_cell()
    }

    pub fn token_name(&self) -> &str {
        &self.profiles.get(self.player()).name
    }

    pub fn token_symbol(&self) -> char {
        self.profiles.get(self.player()).symbol
    }

    pub fn profiles(&self) -> &Profiles {
        &self.profiles
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % MAX_PLAYERS;
    }
}
