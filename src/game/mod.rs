//! Core Connect Four game logic: board, turn order, four-in-a-row detection,
//! and the per-round state the front ends drive.

mod board;
mod goal;
mod player;
mod state;
mod turn;

pub use board::{Board, Cell, COLUMNS, ROWS};
pub use goal::{Direction, GoalChecker, CONNECTIONS_TO_GOAL};
pub use player::{Player, PlayerProfile, Profiles};
pub use state::{GameOutcome, GameState, MoveError};
pub use turn::Turn;
