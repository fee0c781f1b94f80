use crate::game::{GameOutcome, Player};

/// Running tally of finished games, kept in memory for the life of the
/// process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    pub player_a_wins: u64,
    pub player_b_wins: u64,
    pub draws: u64,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished game.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::WonBy(Player::PlayerA) => self.player_a_wins += 1,
            GameOutcome::WonBy(Player::PlayerB) => self.player_b_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn wins(&self, player: Player) -> u64 {
        match player {
            Player::PlayerA => self.player_a_wins,
            Player::PlayerB => self.player_b_wins,
        }
    }

    /// Total games recorded.
    pub fn games(&self) -> u64 {
        self.player_a_wins + self.player_b_wins + self.draws
    }
}
