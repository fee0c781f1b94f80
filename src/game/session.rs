use super::board::{Board, Cell, CONNECT};
use super::player::{Player, SeatConfig, SeatKind};
use crate::error::{BoardError, GameError};
use crate::opponent::{Opponent, RandomOpponent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    WonBy(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress(Player),
    Finished(GameOutcome),
}

/// Why a submitted move was refused. The session is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("column is off the board")]
    OutOfRange,
    #[error("column is full")]
    ColumnFull,
    #[error("game is already finished")]
    GameAlreadyFinished,
    #[error("it is not your turn")]
    NotYourTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Rejected(Rejection),
    Placed {
        row: usize,
        column: usize,
        player: Player,
    },
    PlacedAndWon {
        row: usize,
        column: usize,
        player: Player,
    },
    PlacedAndDraw {
        row: usize,
        column: usize,
    },
}

impl MoveResult {
    /// The outcome this move ended the game with, if any. A session yields
    /// exactly one such result per game.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match *self {
            MoveResult::PlacedAndWon { player, .. } => Some(GameOutcome::WonBy(player)),
            MoveResult::PlacedAndDraw { .. } => Some(GameOutcome::Draw),
            MoveResult::Rejected(_) | MoveResult::Placed { .. } => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveResult::Rejected(_))
    }
}

/// One game of Connect Four between two seats.
///
/// The status is the single source of truth for whose turn it is; every
/// move, human or computer, goes through the same validate, place, check
/// path.
pub struct GameSession {
    board: Board,
    status: GameStatus,
    seats: SeatConfig,
    opponent: Box<dyn Opponent>,
    move_count: usize,
}

impl GameSession {
    /// Start a session whose computer seats play uniformly random moves.
    pub fn start(rows: usize, cols: usize, seats: SeatConfig) -> Result<Self, BoardError> {
        Self::with_opponent(rows, cols, seats, Box::new(RandomOpponent::new()))
    }

    /// Start a session with a specific policy for computer seats.
    pub fn with_opponent(
        rows: usize,
        cols: usize,
        seats: SeatConfig,
        opponent: Box<dyn Opponent>,
    ) -> Result<Self, BoardError> {
        let board = Board::new(rows, cols)?;
        log::info!(
            "starting {rows}x{cols} session: {:?} vs {:?}, opponent policy '{}'",
            seats.player_a,
            seats.player_b,
            opponent.name()
        );
        Ok(GameSession {
            board,
            status: GameStatus::InProgress(Player::PlayerA),
            seats,
            opponent,
            move_count: 0,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player to move, or `None` once the game is finished.
    pub fn active_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::InProgress(player) => Some(player),
            GameStatus::Finished(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            GameStatus::InProgress(_) => None,
            GameStatus::Finished(outcome) => Some(outcome),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> Vec<Vec<Cell>> {
        self.board.snapshot()
    }

    pub fn seats(&self) -> SeatConfig {
        self.seats
    }

    pub fn seat_kind(&self, player: Player) -> SeatKind {
        self.seats.kind(player)
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Display name for a seat: a computer seat is called out as such.
    pub fn seat_label(&self, player: Player) -> &'static str {
        match self.seat_kind(player) {
            SeatKind::Computer => "Computer",
            SeatKind::Human => player.name(),
        }
    }

    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }

    /// The four winning cells, once the game has been won.
    pub fn winning_line(&self) -> Option<[(usize, usize); CONNECT]> {
        match self.status {
            GameStatus::Finished(GameOutcome::WonBy(player)) => self.board.winning_line(player),
            _ => None,
        }
    }

    /// True while the game is running and a computer seat is to move.
    pub fn awaiting_computer(&self) -> bool {
        self.active_player()
            .is_some_and(|player| self.seat_kind(player) == SeatKind::Computer)
    }

    /// Submit a human move for the active seat.
    ///
    /// Illegal input comes back as [`MoveResult::Rejected`] with the session
    /// untouched; `Err` means a board invariant was broken.
    pub fn submit_move(&mut self, column: usize) -> Result<MoveResult, GameError> {
        if self.awaiting_computer() {
            log::debug!("rejected human move in column {column}: computer seat to move");
            return Ok(MoveResult::Rejected(Rejection::NotYourTurn));
        }
        self.apply_move(column)
    }

    /// Let the opponent policy move for the active computer seat.
    ///
    /// Returns `Ok(None)` if the game is over or a human is to move.
    pub fn play_computer_turn(&mut self) -> Result<Option<MoveResult>, GameError> {
        if !self.awaiting_computer() {
            return Ok(None);
        }
        let GameStatus::InProgress(player) = self.status else {
            return Ok(None);
        };

        let name = self.opponent.name().to_string();
        let column = self
            .opponent
            .choose(&self.board, player)
            .ok_or_else(|| GameError::NoOpponentMove(name.clone()))?;

        let result = self.apply_move(column)?;
        if result.is_rejected() {
            log::warn!("opponent '{name}' chose illegal column {column}");
            return Err(GameError::IllegalOpponentChoice {
                name,
                column,
                legal: self.board.legal_columns(),
            });
        }
        Ok(Some(result))
    }

    /// Start a fresh game with the same board size and seats. Player A
    /// always moves first.
    pub fn reset(&mut self) {
        self.board.reset();
        self.status = GameStatus::InProgress(Player::PlayerA);
        self.move_count = 0;
        log::info!("session reset");
    }

    fn apply_move(&mut self, column: usize) -> Result<MoveResult, GameError> {
        let player = match self.status {
            GameStatus::InProgress(player) => player,
            GameStatus::Finished(_) => return Ok(self.reject(column, Rejection::GameAlreadyFinished)),
        };
        if column >= self.board.cols() {
            return Ok(self.reject(column, Rejection::OutOfRange));
        }
        let Some(row) = self.board.next_open_row(column) else {
            return Ok(self.reject(column, Rejection::ColumnFull));
        };

        self.board.place(row, column, player)?;
        self.move_count += 1;
        log::debug!("{} placed at ({row}, {column})", player.name());

        let result = if self.board.check_win(player) {
            self.status = GameStatus::Finished(GameOutcome::WonBy(player));
            log::info!("{} wins after {} moves", player.name(), self.move_count);
            MoveResult::PlacedAndWon {
                row,
                column,
                player,
            }
        } else if self.board.is_full() {
            self.status = GameStatus::Finished(GameOutcome::Draw);
            log::info!("draw after {} moves", self.move_count);
            MoveResult::PlacedAndDraw { row, column }
        } else {
            self.status = GameStatus::InProgress(player.other());
            MoveResult::Placed {
                row,
                column,
                player,
            }
        };
        Ok(result)
    }

    fn reject(&self, column: usize, reason: Rejection) -> MoveResult {
        log::debug!("rejected move in column {column}: {reason}");
        MoveResult::Rejected(reason)
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("status", &self.status)
            .field("seats", &self.seats)
            .field("opponent", &self.opponent.name())
            .field("move_count", &self.move_count)
            .finish()
    }
}
