use crate::game::{Board, Cell, GameOutcome, GameState, GoalChecker, Player, Profiles, COLUMNS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(ROWS as u16 + 4), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let profiles = game_state.turn().profiles();
    let (status, color) = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => (
            format!("{} WIN!!! :-)", profiles.get(player).name),
            player_color(player),
        ),
        Some(GameOutcome::Tie) => ("TIED!!!".to_string(), Color::White),
        None => {
            let turn = game_state.turn();
            (
                format!("TURN: {} ({})", turn.token_name(), turn.token_symbol()),
                player_color(turn.player()),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let board = game_state.board();
    let profiles = game_state.turn().profiles();
    let finished = game_state.is_terminal();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw(" ")];
    for column in 0..COLUMNS {
        let label = format!(" {} ", column + 1);
        if column == selected_column && !finished {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw(" "));
    lines.push(Line::from(col_line));

    let rule = format!("+{}+", "-".repeat(COLUMNS * 3));
    lines.push(Line::from(rule.clone()));

    // Highest row first, so tokens settle at the bottom of the frame.
    for row in (0..ROWS).rev() {
        let mut row_spans = vec![Span::raw("|")];
        for column in 0..COLUMNS {
            row_spans.push(cell_span(board, profiles, column, row, finished));
        }
        row_spans.push(Span::raw("|"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(rule));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn cell_span(
    board: &Board,
    profiles: &Profiles,
    column: usize,
    row: usize,
    finished: bool,
) -> Span<'static> {
    let cell = board.get(column, row);
    let symbol = format!(" {} ", profiles.symbol_for(cell));
    let mut style = match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Red => Style::default().fg(player_color(Player::Red)),
        Cell::Yellow => Style::default().fg(player_color(Player::Yellow)),
    };
    if finished && GoalChecker::achieved_through(board, column, row) {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
