use serde::{Deserialize, Serialize};

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Red, Player::Yellow];

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Yellow => 1,
        }
    }
}

/// How a player is shown on screen. The token identity stays fixed; only the
/// label and the board character are configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub symbol: char,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, symbol: char) -> Self {
        PlayerProfile {
            name: name.into(),
            symbol,
        }
    }

    pub fn default_for(player: Player) -> Self {
        match player {
            Player::Red => PlayerProfile::new("RED", 'R'),
            Player::Yellow => PlayerProfile::new("YELLOW", 'Y'),
        }
    }
}

/// Display profiles for both players, indexed by [`Player::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profiles([PlayerProfile; 2]);

impl Profiles {
    pub fn new(red: PlayerProfile, yellow: PlayerProfile) -> Self {
        Profiles([red, yellow])
    }

    pub fn get(&self, player: Player) -> &PlayerProfile {
        &self.0[player.index()]
    }

    /// Board character for a cell; empty cells render as a space.
    pub fn symbol_for(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => ' ',
            Cell::Red => self.get(Player::Red).symbol,
            Cell::Yellow => self.get(Player::Yellow).symbol,
        }
    }
}

impl Default for Profiles {
    fn default() -> Self {
        Profiles::new(
            PlayerProfile::default_for(Player::Red),
            PlayerProfile::default_for(Player::Yellow),
        )
    }
}
