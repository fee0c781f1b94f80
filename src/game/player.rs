use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    PlayerA,
    PlayerB,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::PlayerA => Player::PlayerB,
            Player::PlayerB => Player::PlayerA,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::PlayerA => Cell::PlayerA,
            Player::PlayerB => Cell::PlayerB,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::PlayerA => "Player A",
            Player::PlayerB => "Player B",
        }
    }
}

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatKind {
    Human,
    Computer,
}

/// Controller assignment for both seats, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatConfig {
    pub player_a: SeatKind,
    pub player_b: SeatKind,
}

impl SeatConfig {
    pub fn new(player_a: SeatKind, player_b: SeatKind) -> Self {
        SeatConfig { player_a, player_b }
    }

    pub fn kind(&self, player: Player) -> SeatKind {
        match player {
            Player::PlayerA => self.player_a,
            Player::PlayerB => self.player_b,
        }
    }
}

impl Default for SeatConfig {
    fn default() -> Self {
        GameMode::PlayerVsPlayer.seats()
    }
}

/// The game modes offered by the front-end menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsComputer,
}

impl GameMode {
    pub fn seats(self) -> SeatConfig {
        match self {
            GameMode::PlayerVsPlayer => SeatConfig::new(SeatKind::Human, SeatKind::Human),
            GameMode::PlayerVsComputer => SeatConfig::new(SeatKind::Human, SeatKind::Computer),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsComputer => "Player vs Computer (Easy)",
        }
    }
}
