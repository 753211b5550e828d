use super::goal::GoalChecker;
use super::{Board, Player, Profiles, Turn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is out of range")]
    InvalidColumn,
    #[error("column is completed")]
    ColumnFull,
    #[error("the round is already over")]
    GameOver,
}

/// One round: the board, whose turn it is, and the result once decided.
///
/// The turn is advanced explicitly with [`GameState::advance_turn`] before
/// each move, so a fresh round's first mover is the player after index 0.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    turn: Turn,
    outcome: Option<GameOutcome>,
}

impl GameState {
    pub fn new(profiles: Profiles) -> Self {
        GameState {
            board: Board::new(),
            turn: Turn::new(profiles),
            outcome: None,
        }
    }

    /// Empty the board and rewind the turn for a new round.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn.reset();
        self.outcome = None;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    pub fn current_player(&self) -> Player {
        self.turn.player()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Hand the move to the other player and return who that is.
    pub fn advance_turn(&mut self) -> Player {
        self.turn.next();
        self.turn.player()
    }

    /// Columns that can still take a token.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..super::COLUMNS)
            .filter(|&column| !self.board.column_completed(column))
            .collect()
    }

    /// Drop the current player's token into `column` and settle the outcome.
    /// Returns the row the token landed on.
    pub fn drop_token(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.column_in_range(column as i64) {
            return Err(MoveError::InvalidColumn);
        }
        if self.board.column_completed(column) {
            return Err(MoveError::ColumnFull);
        }

        let token = self.turn.token();
        let row = self.board.drop_token(token, column);
        tracing::debug!(
            player = self.turn.token_name(),
            column,
            row,
            "token dropped"
        );

        // A drop that fills the board and completes a line is a win.
        if GoalChecker::achieved(&self.board, token) {
            self.outcome = Some(GameOutcome::Winner(self.turn.player()));
        } else if self.board.is_completed() {
            self.outcome = Some(GameOutcome::Tie);
        }

        Ok(row)
    }
}
