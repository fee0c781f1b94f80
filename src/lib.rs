//! # Connect Four
//!
//! A Connect Four engine with a pluggable computer opponent, plus a thin
//! terminal front-end built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players and seats, session state machine
//! - [`opponent`] — Opponent trait and the random policy
//! - [`score`] — In-memory running score tally
//! - [`ui`] — Terminal UI: main menu, scoreboard, game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod opponent;
pub mod score;
pub mod ui;
