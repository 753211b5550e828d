//! Four-in-a-row detection.
//!
//! The whole-board sweep ([`GoalChecker::achieved`]) is what the game loop
//! uses. [`GoalChecker::achieved_through`] answers the same question for
//! lines passing through one cell, which is all that can change after a drop.

use std::ops::Range;

use super::board::{Board, Cell, COLUMNS, ROWS};

pub const CONNECTIONS_TO_GOAL: usize = 4;

/// Steps needed past the start cell to complete a line.
const REACH: usize = CONNECTIONS_TO_GOAL - 1;

/// A line family, as a `(column, row)` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Up and to the right.
    Diagonal,
    /// Down and to the right.
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    /// Every `(column, row)` from which a full line in this direction stays
    /// on the board.
    pub fn starts(self) -> impl Iterator<Item = (usize, usize)> {
        let (column_offset, row_offset) = self.offset();
        let rows = start_range(row_offset, ROWS);
        start_range(column_offset, COLUMNS)
            .flat_map(move |column| rows.clone().map(move |row| (column, row)))
    }

    /// The cells of the line beginning at `(column, row)`. Only meaningful for
    /// starts produced by [`Direction::starts`].
    pub fn window(self, column: usize, row: usize) -> [(usize, usize); CONNECTIONS_TO_GOAL] {
        let (column_offset, row_offset) = self.offset();
        std::array::from_fn(|step| {
            let step = step as isize;
            (
                (column as isize + step * column_offset) as usize,
                (row as isize + step * row_offset) as usize,
            )
        })
    }
}

/// Starting indices along one axis. A negative offset walks back toward 0, so
/// its starts begin `REACH` cells in.
fn start_range(offset: isize, len: usize) -> Range<usize> {
    match offset.signum() {
        1 => 0..len - REACH,
        -1 => REACH..len,
        _ => 0..len,
    }
}

pub struct GoalChecker;

impl GoalChecker {
    /// Whether `token` owns four consecutive cells anywhere on the board.
    /// Pass the token of the player who just moved.
    pub fn achieved(board: &Board, token: Cell) -> bool {
        if token.is_empty() {
            return false;
        }

        Direction::ALL.iter().any(|&direction| {
            direction.starts().any(|(column, row)| {
                direction
                    .window(column, row)
                    .iter()
                    .all(|&(c, r)| board.get(c, r) == token)
            })
        })
    }

    /// Whether the token at `(column, row)` is part of a four-in-a-row.
    pub fn achieved_through(board: &Board, column: usize, row: usize) -> bool {
        let token = board.get(column, row);
        if token.is_empty() {
            return false;
        }

        Direction::ALL.iter().any(|&direction| {
            let (dc, dr) = direction.offset();
            let forward = run_length(board, token, (column, row), (dc, dr));
            let backward = run_length(board, token, (column, row), (-dc, -dr));
            1 + forward + backward >= CONNECTIONS_TO_GOAL
        })
    }
}

/// Count same-token cells stepping away from `from`, not counting `from`.
fn run_length(board: &Board, token: Cell, from: (usize, usize), step: (isize, isize)) -> usize {
    let mut column = from.0 as isize;
    let mut row = from.1 as isize;
    let mut count = 0;

    while count < REACH {
        column += step.0;
        row += step.1;
        if !(0..COLUMNS as isize).contains(&column) || !(0..ROWS as isize).contains(&row) {
            break;
        }
        if board.get(column as usize, row as usize) != token {
            break;
        }
        count += 1;
    }

    count
}
