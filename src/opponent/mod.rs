//! Column-choosing policies for computer-controlled seats.

mod random;

pub use random::RandomOpponent;

use crate::game::{Board, Player};

/// Universal interface for computer opponents.
pub trait Opponent {
    /// Pick a column for `player` to drop into.
    ///
    /// Must return a column for which [`Board::is_valid_move`] holds, or
    /// `None` when no such column exists.
    fn choose(&mut self, board: &Board, player: Player) -> Option<usize>;

    /// Return the opponent's display name.
    fn name(&self) -> &str;
}
