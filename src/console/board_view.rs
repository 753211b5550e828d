use crate::game::{Board, Profiles, COLUMNS, ROWS};

const VERTICAL_SEPARATOR: char = '|';

/// Render the board as text: a `-` rule, rows from the top down as
/// `|c|c|...|`, then a closing rule. No trailing newline.
pub fn render(board: &Board, profiles: &Profiles) -> String {
    let rule = "-".repeat(COLUMNS * 2 + 1);
    let mut text = String::with_capacity((rule.len() + 1) * (ROWS + 2));

    text.push_str(&rule);
    text.push('\n');
    for row in (0..ROWS).rev() {
        for column in 0..COLUMNS {
            text.push(VERTICAL_SEPARATOR);
            text.push(profiles.symbol_for(board.get(column, row)));
        }
        text.push(VERTICAL_SEPARATOR);
        text.push('\n');
    }
    text.push_str(&rule);

    text
}
