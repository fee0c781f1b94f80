use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::Opponent;
use crate::game::{Board, Player};

/// An opponent that selects uniformly at random from legal columns.
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new() -> Self {
        RandomOpponent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic opponent for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        RandomOpponent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn choose(&mut self, board: &Board, _player: Player) -> Option<usize> {
        let columns = board.legal_columns();
        if columns.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..columns.len());
        Some(columns[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_opponent_selects_legal_column() {
        let mut opponent = RandomOpponent::new();
        let board = Board::default();

        for _ in 0..100 {
            let col = opponent.choose(&board, Player::PlayerB).unwrap();
            assert!(board.is_valid_move(col), "column {} is not legal", col);
        }
    }

    #[test]
    fn test_random_opponent_avoids_full_columns() {
        let mut opponent = RandomOpponent::seeded(3);
        let board = Board::from_rows(&[
            "AB.A.BA",
            "BA.B.AB",
            "AB.A.BA",
            "BA.B.AB",
            "AB.A.BA",
            "BA.B.AB",
        ])
        .unwrap();

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let col = opponent.choose(&board, Player::PlayerA).unwrap();
            assert!(board.is_valid_move(col), "column {} is not legal", col);
            seen.insert(col);
        }
        assert_eq!(seen, HashSet::from([2, 4]));
    }

    #[test]
    fn test_random_opponent_on_full_board() {
        let mut opponent = RandomOpponent::seeded(0);
        let board = Board::from_rows(&["ABAB", "BABA", "ABAB", "BABA"]).unwrap();
        assert!(board.is_full());
        assert_eq!(opponent.choose(&board, Player::PlayerA), None);
    }

    #[test]
    fn test_seeded_opponents_agree() {
        let board = Board::default();
        let mut first = RandomOpponent::seeded(42);
        let mut second = RandomOpponent::seeded(42);
        for _ in 0..20 {
            assert_eq!(
                first.choose(&board, Player::PlayerA),
                second.choose(&board, Player::PlayerA)
            );
        }
    }

    #[test]
    fn test_random_opponent_name() {
        let opponent = RandomOpponent::new();
        assert_eq!(opponent.name(), "Random");
    }
}
