use crate::game::{GameOutcome, GameState, MoveError, Profiles, COLUMNS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Full-screen front end: pick a column with the arrow keys and drop with
/// Enter. Turn order and outcomes match the console game.
pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(profiles: Profiles) -> Self {
        let mut game_state = GameState::new(profiles);
        game_state.advance_turn();
        App {
            game_state,
            selected_column: COLUMNS / 2,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLUMNS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token();
            }
            KeyCode::Char('r') => {
                self.restart();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.game_state.reset();
        self.game_state.advance_turn();
        self.selected_column = COLUMNS / 2;
        tracing::info!("round started");
    }

    fn drop_token(&mut self) {
        match self.game_state.drop_token(self.selected_column) {
            Ok(_) => match self.game_state.outcome() {
                Some(outcome) => {
                    self.message = Some(self.outcome_message(outcome));
                    tracing::info!(?outcome, "round over");
                }
                None => {
                    self.game_state.advance_turn();
                    self.select_open_column();
                }
            },
            Err(MoveError::ColumnFull) => {
                self.message = Some("Invalid column!!! It's completed".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Move the selection off a completed column to the closest open one,
    /// preferring the left on a tie.
    fn select_open_column(&mut self) {
        let selected = self.selected_column;
        if let Some(column) = self
            .game_state
            .legal_columns()
            .into_iter()
            .min_by_key(|column| column.abs_diff(selected))
        {
            self.selected_column = column;
        }
    }

    fn outcome_message(&self, outcome: GameOutcome) -> String {
        match outcome {
            GameOutcome::Winner(player) => {
                let name = &self.game_state.turn().profiles().get(player).name;
                format!("{name} WIN!!! :-)")
            }
            GameOutcome::Tie => "TIED!!!".to_string(),
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Player};
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_selection_stays_on_board() {
        let mut app = App::new(Profiles::default());
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, COLUMNS - 1);
    }

    #[test]
    fn test_drop_alternates_players() {
        let mut app = App::new(Profiles::default());
        assert_eq!(app.game_state.current_player(), Player::Yellow);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state.board().get(COLUMNS / 2, 0), Cell::Yellow);
        assert_eq!(app.game_state.current_player(), Player::Red);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.game_state.board().get(COLUMNS / 2, 1), Cell::Red);
    }

    #[test]
    fn test_win_and_restart() {
        let mut app = App::new(Profiles::default());
        for _ in 0..3 {
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Left);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.game_state.outcome(),
            Some(GameOutcome::Winner(Player::Yellow))
        );
        assert_eq!(app.message.as_deref(), Some("YELLOW WIN!!! :-)"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.message.as_deref(),
            Some("Game over! Press 'r' to restart.")
        );

        press(&mut app, KeyCode::Char('r'));
        assert!(!app.game_state.is_terminal());
        assert_eq!(app.game_state.board().token_count(), 0);
        assert_eq!(app.game_state.current_player(), Player::Yellow);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::new(Profiles::default());
        for _ in 0..crate::game::ROWS {
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.message.as_deref(),
            Some("Invalid column!!! It's completed")
        );
    }

    #[test]
    fn test_selection_leaves_completed_column() {
        let mut app = App::new(Profiles::default());
        for _ in 0..crate::game::ROWS {
            press(&mut app, KeyCode::Enter);
        }
        assert!(app.game_state.board().column_completed(COLUMNS / 2));
        assert_eq!(app.selected_column, COLUMNS / 2 - 1);
        assert!(app.game_state.legal_columns().contains(&app.selected_column));
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Profiles::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_renders_to_test_backend() {
        let mut app = App::new(Profiles::default());
        press(&mut app, KeyCode::Enter);

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Connect Four"));
        assert!(text.contains("TURN: RED (R)"));
    }
}
