//! Full-screen terminal front end built on ratatui, an alternative to the
//! line-based console.

mod app;
mod game_view;

pub use app::App;
