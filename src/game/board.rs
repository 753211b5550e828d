pub const ROWS: usize = 6;
pub const COLUMNS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The 7x6 grid. Cells are addressed as `(column, row)` with row 0 at the
/// bottom, so a column's tokens always occupy rows `0..height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; ROWS]; COLUMNS],
    heights: [usize; COLUMNS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; ROWS]; COLUMNS],
            heights: [0; COLUMNS],
        }
    }

    /// Remove every token.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Get the cell at a specific position
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.cells[column][row]
    }

    /// Signed so a 1-based answer of `0` comes through as `-1` and is rejected.
    pub fn column_in_range(&self, column: i64) -> bool {
        (0..COLUMNS as i64).contains(&column)
    }

    pub fn column_completed(&self, column: usize) -> bool {
        self.heights[column] == ROWS
    }

    /// Number of tokens stacked in `column`.
    pub fn column_height(&self, column: usize) -> usize {
        self.heights[column]
    }

    /// Place `token` at the lowest free row of `column` and return that row.
    ///
    /// The caller must have checked that the column is in range and not
    /// completed; this method does no validation of its own.
    pub fn drop_token(&mut self, token: Cell, column: usize) -> usize {
        debug_assert!(!token.is_empty(), "dropping an empty token");
        debug_assert!(
            column < COLUMNS && !self.column_completed(column),
            "drop into unavailable column {column}"
        );

        let row = self.heights[column];
        self.cells[column][row] = token;
        self.heights[column] += 1;
        row
    }

    /// Check if the board is completely full
    pub fn is_completed(&self) -> bool {
        (0..COLUMNS).all(|column| self.column_completed(column))
    }

    pub fn token_count(&self) -> usize {
        self.heights.iter().sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
