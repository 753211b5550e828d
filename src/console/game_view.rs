use super::board_view;
use super::dialog::YesNoDialog;
use super::io::TextIo;
use crate::error::ConsoleError;
use crate::game::{Board, GameOutcome, GameState, Profiles, COLUMNS};

const TITLE: &str = "--- CONNECT 4 ---";
const COLUMN_PROMPT: &str = "Enter a column to drop a token:";
const REPLAY_QUESTION: &str = "Would you like to play again?";

/// Plays rounds on a text console until the players decline a rematch.
pub struct ConnectFour<'a, T> {
    io: &'a mut T,
    state: GameState,
}

impl<'a, T: TextIo> ConnectFour<'a, T> {
    pub fn new(io: &'a mut T, profiles: Profiles) -> Self {
        ConnectFour {
            io,
            state: GameState::new(profiles),
        }
    }

    /// Run rounds until the replay question is answered `n`. Returns the
    /// outcome of every round played.
    pub fn start(&mut self) -> Result<Vec<GameOutcome>, ConsoleError> {
        let mut dialog = YesNoDialog::new(REPLAY_QUESTION);
        let mut outcomes = Vec::new();

        loop {
            let outcome = self.play_round()?;
            outcomes.push(outcome);
            dialog.ask(&mut *self.io)?;
            if !dialog.is_affirmative() {
                break;
            }
        }

        tracing::info!(rounds = outcomes.len(), "session finished");
        Ok(outcomes)
    }

    /// Play one round from an empty board and print its result.
    pub fn play_round(&mut self) -> Result<GameOutcome, ConsoleError> {
        self.state.reset();
        tracing::info!("round started");

        self.io.writeln(TITLE)?;
        self.print_board()?;

        let outcome = loop {
            self.state.advance_turn();
            self.io
                .writeln(&format!("TURN: {}", self.state.turn().token_name()))?;

            let column = self.ask_valid_column()?;
            self.state.drop_token(column)?;
            self.print_board()?;

            if let Some(outcome) = self.state.outcome() {
                break outcome;
            }
        };

        self.print_result(outcome)?;
        Ok(outcome)
    }

    fn print_board(&mut self) -> Result<(), ConsoleError> {
        let text = board_view::render(self.state.board(), self.state.turn().profiles());
        self.io.writeln(&text)
    }

    fn print_result(&mut self, outcome: GameOutcome) -> Result<(), ConsoleError> {
        match outcome {
            GameOutcome::Winner(player) => {
                let name = &self.state.turn().profiles().get(player).name;
                tracing::info!(winner = %name, "round won");
                self.io.writeln(&format!("{name} WIN!!! :-)"))
            }
            GameOutcome::Tie => {
                tracing::info!("round tied");
                self.io.writeln("TIED!!!")
            }
        }
    }

    /// Prompt until the answer names a column that is on the board and not
    /// completed. Answers are 1-based.
    fn ask_valid_column(&mut self) -> Result<usize, ConsoleError> {
        loop {
            let column = self.io.read_number(COLUMN_PROMPT)?.saturating_sub(1);
            match check_column(self.state.board(), column) {
                Ok(column) => return Ok(column),
                Err(reason) => {
                    tracing::warn!(column = column.saturating_add(1), %reason, "column rejected");
                    self.io.writeln(&reason)?;
                }
            }
        }
    }
}

fn check_column(board: &Board, column: i64) -> Result<usize, String> {
    if !board.column_in_range(column) {
        return Err(format!("Invalid column!!! Values [1-{COLUMNS}]"));
    }
    let column = column as usize;
    if board.column_completed(column) {
        return Err("Invalid column!!! It's completed".to_string());
    }
    Ok(column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Console;
    use crate::game::{Player, PlayerProfile, ROWS};
    use std::io::Cursor;

    fn run(input: &str) -> (Vec<GameOutcome>, String) {
        run_with(input, Profiles::default())
    }

    fn run_with(input: &str, profiles: Profiles) -> (Vec<GameOutcome>, String) {
        run_bytes(input.as_bytes().to_vec(), profiles)
    }

    fn run_bytes(input: Vec<u8>, profiles: Profiles) -> (Vec<GameOutcome>, String) {
        let mut io = Console::new(Cursor::new(input), Vec::new());
        let outcomes = ConnectFour::new(&mut io, profiles).start().unwrap();
        (outcomes, String::from_utf8(io.into_output()).unwrap())
    }

    /// Answers for a round where the first mover stacks four in column 1
    /// while the other player stacks in column 2.
    const VERTICAL_WIN: &str = "1\n2\n1\n2\n1\n2\n1\n";

    #[test]
    fn test_vertical_win_transcript() {
        let (outcomes, out) = run(&format!("{VERTICAL_WIN}n\n"));

        assert_eq!(outcomes, vec![GameOutcome::Winner(Player::Yellow)]);
        assert!(out.starts_with("--- CONNECT 4 ---\n---------------\n"));
        assert!(out.contains("TURN: YELLOW\n"));
        assert!(out.contains("TURN: RED\n"));
        assert!(out.contains("YELLOW WIN!!! :-)\n"));
        assert_eq!(out.matches("TURN: ").count(), 7);
        assert!(out.contains("|Y|R| | | | | |"));
    }

    #[test]
    fn test_invalid_columns_are_reprompted() {
        let (outcomes, out) = run(&format!("0\n8\n-4\nx\n{VERTICAL_WIN}n\n"));

        assert_eq!(outcomes.len(), 1);
        assert_eq!(out.matches("Invalid column!!! Values [1-7]").count(), 3);
        assert_eq!(out.matches("Please, enter a number").count(), 1);
        // The rejected answers never consumed a turn.
        assert_eq!(out.matches("TURN: ").count(), 7);
    }

    #[test]
    fn test_undecodable_answers_are_reprompted() {
        let mut input = b"\xff\xfe\n".to_vec();
        input.extend_from_slice(VERTICAL_WIN.as_bytes());
        input.extend_from_slice(b"\xff\nn\n");
        let (outcomes, out) = run_bytes(input, Profiles::default());

        assert_eq!(outcomes, vec![GameOutcome::Winner(Player::Yellow)]);
        assert_eq!(out.matches("Please, enter a number").count(), 1);
        assert_eq!(out.matches(r#"Please, answer "y" or "n""#).count(), 1);
        assert_eq!(out.matches("TURN: ").count(), 7);
    }

    #[test]
    fn test_completed_column_is_reprompted() {
        // Six drops fill column 1 without a winner, the seventh answer is rejected.
        let fill = "1\n".repeat(ROWS);
        let (outcomes, out) = run(&format!("{fill}1\n2\n3\n2\n3\n2\n3\n2\nn\n"));

        assert_eq!(outcomes.len(), 1);
        assert_eq!(out.matches("Invalid column!!! It's completed").count(), 1);
    }

    #[test]
    fn test_tied_round() {
        // Fill columns in the order 1,2 / 3,4 / 5,6, then 7, three rows at a time:
        // every column alternates and no line of four forms.
        let mut answers = String::new();
        for pair in [[1, 2], [3, 4], [5, 6]] {
            for _ in 0..3 {
                answers.push_str(&format!("{}\n{}\n", pair[0], pair[1]));
            }
            for _ in 0..3 {
                answers.push_str(&format!("{}\n{}\n", pair[1], pair[0]));
            }
        }
        for _ in 0..ROWS {
            answers.push_str("7\n");
        }

        let (outcomes, out) = run(&format!("{answers}n\n"));
        assert_eq!(outcomes, vec![GameOutcome::Tie]);
        assert!(out.contains("TIED!!!\n"));
        assert!(!out.contains("WIN!!!"));
    }

    #[test]
    fn test_replay_starts_fresh_round() {
        let (outcomes, out) = run(&format!("{VERTICAL_WIN}maybe\ny\n{VERTICAL_WIN}n\n"));

        assert_eq!(outcomes.len(), 2);
        assert_eq!(out.matches("Would you like to play again? ").count(), 3);
        assert_eq!(out.matches("--- CONNECT 4 ---").count(), 2);
        assert_eq!(out.matches(r#"Please, answer "y" or "n""#).count(), 1);
        assert_eq!(out.matches("YELLOW WIN!!! :-)").count(), 2);
    }

    #[test]
    fn test_configured_names_in_transcript() {
        let profiles = Profiles::new(PlayerProfile::new("ANN", 'A'), PlayerProfile::new("BEN", 'B'));
        let (_, out) = run_with(&format!("{VERTICAL_WIN}n\n"), profiles);
        assert!(out.contains("TURN: BEN\n"));
        assert!(out.contains("BEN WIN!!! :-)"));
        assert!(out.contains("|B|A| | | | | |"));
    }

    #[test]
    fn test_closed_input_ends_session() {
        let mut io = Console::new(Cursor::new(b"1\n2\n".to_vec()), Vec::new());
        let result = ConnectFour::new(&mut io, Profiles::default()).start();
        assert!(matches!(result, Err(ConsoleError::InputClosed)));
    }
}
