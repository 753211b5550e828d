//! Line-based text front end: prompts, board rendering, and the round loop
//! with its replay dialog.

pub mod board_view;
mod dialog;
mod game_view;
mod io;

pub use dialog::YesNoDialog;
pub use game_view::ConnectFour;
pub use io::{Console, TextIo};
