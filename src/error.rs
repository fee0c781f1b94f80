use std::path::PathBuf;

/// Errors raised by [`Board`](crate::game::Board) construction and writes.
///
/// A write error means a caller skipped the validate-then-place contract;
/// it is a bug in the caller, not bad user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least {min}x{min}, got {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize, min: usize },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cell ({row}, {col}) is occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) is not the lowest empty cell of its column")]
    Floating { row: usize, col: usize },

    #[error("unknown cell symbol '{symbol}' at ({row}, {col})")]
    InvalidSymbol { symbol: char, row: usize, col: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl BoardError {
    pub fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self::OutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }

    pub fn cell_occupied(row: usize, col: usize) -> Self {
        Self::CellOccupied { row, col }
    }

    pub fn floating(row: usize, col: usize) -> Self {
        Self::Floating { row, col }
    }
}

/// Errors that can occur while a session advances. Rejected user input is
/// not an error; see [`MoveResult::Rejected`](crate::game::MoveResult).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board invariant violated: {0}")]
    Board(#[from] BoardError),

    #[error("opponent '{name}' chose illegal column {column} (legal: {legal:?})")]
    IllegalOpponentChoice {
        name: String,
        column: usize,
        legal: Vec<usize>,
    },

    #[error("opponent '{0}' found no legal column on a board that is not full")]
    NoOpponentMove(String),
}

/// Errors that end the terminal front-end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not start game: {0}")]
    Board(#[from] BoardError),

    #[error("game engine error: {0}")]
    Game(#[from] GameError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::TooSmall {
            rows: 3,
            cols: 7,
            min: 4,
        };
        assert_eq!(err.to_string(), "board must be at least 4x4, got 3x7");

        let err = BoardError::cell_occupied(5, 3);
        assert_eq!(err.to_string(), "cell (5, 3) is occupied");
    }

    #[test]
    fn test_game_error_display() {
        let err = GameError::IllegalOpponentChoice {
            name: "Random".to_string(),
            column: 9,
            legal: vec![0, 1, 2],
        };
        assert_eq!(
            err.to_string(),
            "opponent 'Random' chose illegal column 9 (legal: [0, 1, 2])"
        );
    }

    #[test]
    fn test_game_error_wraps_board_error() {
        let err: GameError = BoardError::floating(2, 0).into();
        assert_eq!(
            err.to_string(),
            "board invariant violated: cell (2, 0) is not the lowest empty cell of its column"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.rows must be >= 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be >= 4"
        );
    }
}
