//! # Connect Four
//!
//! Two-player Connect Four on a 7x6 board, played from the terminal.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, turn order, four-in-a-row detection
//! - [`console`] — Line-based text front end and the round/replay loop
//! - [`ui`] — Full-screen ratatui front end
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
