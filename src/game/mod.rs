//! Core Connect Four game logic: board representation, seats and players,
//! and the session state machine.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, CONNECT, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::{GameMode, Player, SeatConfig, SeatKind};
pub use session::{GameOutcome, GameSession, GameStatus, MoveResult, Rejection};
