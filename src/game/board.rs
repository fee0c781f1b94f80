use std::fmt;

use super::player::Player;
use crate::error::BoardError;

/// Number of pieces in a row needed to win. Also the smallest usable board
/// dimension, since a win must fit along both axes.
pub const CONNECT: usize = 4;
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Row/column steps for horizontal, vertical, diagonal up-right (/) and
/// diagonal down-right (\). Row 0 is the top, so "up" is a negative step.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    /// Text symbol used by [`Board::from_rows`] and `Display`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerA => 'A',
            Cell::PlayerB => 'B',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Empty),
            'A' => Some(Cell::PlayerA),
            'B' => Some(Cell::PlayerB),
            _ => None,
        }
    }
}

/// A rows x cols Connect Four grid.
///
/// Row 0 is the top, row `rows - 1` is the bottom. The only mutation is
/// [`place`](Board::place), which refuses any write that would leave a piece
/// floating above an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows < CONNECT || cols < CONNECT {
            return Err(BoardError::TooSmall {
                rows,
                cols,
                min: CONNECT,
            });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// Build a position from text rows, top row first, using `.` for empty
    /// and `A`/`B` for pieces.
    ///
    /// Pieces are taken exactly as written and gravity is not checked, so
    /// arbitrary positions can be set up for analysis.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let cols = rows.first().map_or(0, |row| row.chars().count());
        let mut board = Board::new(rows.len(), cols)?;

        for (row, text) in rows.iter().enumerate() {
            let found = text.chars().count();
            if found != cols {
                return Err(BoardError::RaggedRows {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, symbol) in text.chars().enumerate() {
                let cell = Cell::from_symbol(symbol)
                    .ok_or(BoardError::InvalidSymbol { symbol, row, col })?;
                let idx = board.index(row, col);
                board.cells[idx] = cell;
            }
        }

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the cell at a specific position.
    ///
    /// # Panics
    /// If `(row, col)` is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside the {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[self.index(row, col)]
    }

    /// True iff `col` is on the board and its top cell is empty.
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < self.cols && self.get(0, col) == Cell::Empty
    }

    /// Lowest empty row in `col`, or `None` if the column is full or off the board.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Write `player`'s piece at `(row, col)`.
    ///
    /// The caller resolves the row with [`next_open_row`](Board::next_open_row)
    /// first. Anything else is rejected and the board is left untouched.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::out_of_bounds(row, col, self.rows, self.cols));
        }
        if self.get(row, col) != Cell::Empty {
            return Err(BoardError::cell_occupied(row, col));
        }
        if self.next_open_row(col) != Some(row) {
            return Err(BoardError::floating(row, col));
        }

        let idx = self.index(row, col);
        self.cells[idx] = player.to_cell();
        Ok(())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.is_valid_move(col))
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_valid_move(col)).collect()
    }

    /// True iff `player` has at least one run of four anywhere on the board.
    pub fn check_win(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// First run of four `player` pieces found by scanning every window of
    /// length four along all four axes.
    pub fn winning_line(&self, player: Player) -> Option<[(usize, usize); CONNECT]> {
        let target = player.to_cell();

        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.get(row, col) != target {
                    continue;
                }
                for direction in DIRECTIONS {
                    let Some(line) = self.window(row, col, direction) else {
                        continue;
                    };
                    if line.iter().all(|&(r, c)| self.get(r, c) == target) {
                        return Some(line);
                    }
                }
            }
        }

        None
    }

    /// Coordinates of the length-four window starting at `(row, col)`, or
    /// `None` if it runs off the board.
    fn window(
        &self,
        row: usize,
        col: usize,
        (dr, dc): (isize, isize),
    ) -> Option<[(usize, usize); CONNECT]> {
        let mut line = [(0, 0); CONNECT];
        for (step, slot) in line.iter_mut().enumerate() {
            let r = row.checked_add_signed(dr * step as isize)?;
            let c = col.checked_add_signed(dc * step as isize)?;
            if r >= self.rows || c >= self.cols {
                return None;
            }
            *slot = (r, c);
        }
        Some(line)
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Owned copy of the grid, top row first, for renderers.
    pub fn snapshot(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols).map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn drop_piece(board: &mut Board, col: usize, player: Player) -> usize {
        let row = board.next_open_row(col).expect("column has room");
        board.place(row, col, player).unwrap();
        row
    }

    /// Reference check that only looks at the four axes through one cell.
    fn wins_through(board: &Board, row: usize, col: usize) -> bool {
        let cell = board.get(row, col);
        if cell == Cell::Empty {
            return false;
        }
        DIRECTIONS.iter().any(|&(dr, dc)| {
            let mut count = 1;
            for sign in [1isize, -1] {
                let (mut r, mut c) = (row as isize, col as isize);
                loop {
                    r += dr * sign;
                    c += dc * sign;
                    if r < 0
                        || c < 0
                        || r >= board.rows() as isize
                        || c >= board.cols() as isize
                        || board.get(r as usize, c as usize) != cell
                    {
                        break;
                    }
                    count += 1;
                }
            }
            count >= CONNECT
        })
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        for row in 0..DEFAULT_ROWS {
            for col in 0..DEFAULT_COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board, Board::new(6, 7).unwrap());
    }

    #[test]
    fn test_rejects_small_dimensions() {
        assert_eq!(
            Board::new(3, 7),
            Err(BoardError::TooSmall {
                rows: 3,
                cols: 7,
                min: 4
            })
        );
        assert!(Board::new(6, 3).is_err());
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        let row = drop_piece(&mut board, 3, Player::PlayerA);
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::PlayerA);

        let row = drop_piece(&mut board, 3, Player::PlayerB);
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::PlayerB);
    }

    #[test]
    fn test_column_fills_after_six_drops() {
        let mut board = Board::default();

        for _ in 0..DEFAULT_ROWS {
            assert!(board.is_valid_move(3));
            drop_piece(&mut board, 3, Player::PlayerA);
        }

        assert!(!board.is_valid_move(3));
        assert_eq!(board.next_open_row(3), None);
        assert_eq!(board.legal_columns(), vec![0, 1, 2, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let board = Board::default();
        assert!(!board.is_valid_move(7));
        assert_eq!(board.next_open_row(7), None);
    }

    #[test]
    fn test_place_out_of_bounds_fails() {
        let mut board = Board::default();
        assert_eq!(
            board.place(0, 7, Player::PlayerA),
            Err(BoardError::out_of_bounds(0, 7, 6, 7))
        );
        assert_eq!(
            board.place(6, 0, Player::PlayerA),
            Err(BoardError::out_of_bounds(6, 0, 6, 7))
        );
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_place_on_occupied_cell_fails() {
        let mut board = Board::default();
        drop_piece(&mut board, 2, Player::PlayerA);
        let before = board.clone();

        assert_eq!(
            board.place(5, 2, Player::PlayerB),
            Err(BoardError::cell_occupied(5, 2))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_floating_piece_fails() {
        let mut board = Board::default();
        assert_eq!(
            board.place(3, 0, Player::PlayerA),
            Err(BoardError::floating(3, 0))
        );
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::default();
        for col in 0..DEFAULT_COLS {
            for _ in 0..DEFAULT_ROWS {
                drop_piece(&mut board, col, Player::PlayerA);
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        for col in 0..4 {
            drop_piece(&mut board, col, Player::PlayerA);
        }
        assert!(board.check_win(Player::PlayerA));
        assert!(!board.check_win(Player::PlayerB));
        assert_eq!(
            board.winning_line(Player::PlayerA),
            Some([(5, 0), (5, 1), (5, 2), (5, 3)])
        );
    }

    #[test]
    fn test_horizontal_win_from_rows() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            "AAAA...",
            ".......",
            ".......",
        ])
        .unwrap();
        assert!(board.check_win(Player::PlayerA));
        assert_eq!(
            board.winning_line(Player::PlayerA),
            Some([(3, 0), (3, 1), (3, 2), (3, 3)])
        );
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        for _ in 0..4 {
            drop_piece(&mut board, 3, Player::PlayerB);
        }
        assert!(board.check_win(Player::PlayerB));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::default();
        // Create diagonal / pattern
        drop_piece(&mut board, 0, Player::PlayerA);

        drop_piece(&mut board, 1, Player::PlayerB);
        drop_piece(&mut board, 1, Player::PlayerA);

        drop_piece(&mut board, 2, Player::PlayerB);
        drop_piece(&mut board, 2, Player::PlayerB);
        drop_piece(&mut board, 2, Player::PlayerA);

        drop_piece(&mut board, 3, Player::PlayerB);
        drop_piece(&mut board, 3, Player::PlayerB);
        drop_piece(&mut board, 3, Player::PlayerB);
        assert!(!board.check_win(Player::PlayerA));
        drop_piece(&mut board, 3, Player::PlayerA);

        assert!(board.check_win(Player::PlayerA));
    }

    #[test]
    fn test_diagonal_down_win() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "...B...",
            "...AB..",
            "...AAB.",
            "...AAAB",
        ])
        .unwrap();
        assert!(board.check_win(Player::PlayerB));
        assert!(!board.check_win(Player::PlayerA));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            drop_piece(&mut board, col, Player::PlayerA);
        }
        assert!(!board.check_win(Player::PlayerA));
    }

    #[test]
    fn test_multiple_lines_still_one_win() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "A......",
            "A......",
            "A......",
            "AAAA...",
        ])
        .unwrap();
        assert!(board.check_win(Player::PlayerA));
    }

    #[test]
    fn test_win_on_non_default_board() {
        let mut board = Board::new(4, 9).unwrap();
        for col in 5..9 {
            drop_piece(&mut board, col, Player::PlayerB);
        }
        assert_eq!(
            board.winning_line(Player::PlayerB),
            Some([(3, 5), (3, 6), (3, 7), (3, 8)])
        );
    }

    #[test]
    fn test_full_scan_matches_last_move_check() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let mut board = Board::default();
            let mut player = Player::PlayerA;
            loop {
                let legal = board.legal_columns();
                if legal.is_empty() {
                    break;
                }
                let col = legal[rng.random_range(0..legal.len())];
                let row = drop_piece(&mut board, col, player);

                assert_eq!(board.check_win(player), wins_through(&board, row, col));
                if board.check_win(player) {
                    break;
                }
                player = player.other();
            }
        }
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::default();
        drop_piece(&mut board, 0, Player::PlayerA);
        drop_piece(&mut board, 6, Player::PlayerB);
        board.reset();
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert_eq!(
            Board::from_rows(&["....", "....", "..X.", "...."]),
            Err(BoardError::InvalidSymbol {
                symbol: 'X',
                row: 2,
                col: 2
            })
        );
        assert_eq!(
            Board::from_rows(&["....", "....", ".....", "...."]),
            Err(BoardError::RaggedRows {
                row: 2,
                expected: 4,
                found: 5
            })
        );
        assert!(Board::from_rows(&["...."]).is_err());
    }

    #[test]
    fn test_from_rows_takes_pieces_as_written() {
        let board = Board::from_rows(&["....", "A...", "....", "...."]).unwrap();
        assert_eq!(board.get(1, 0), Cell::PlayerA);
        assert_eq!(board.get(3, 0), Cell::Empty);
        assert_eq!(board.to_string(), "....\nA...\n....\n....");
    }

    #[test]
    fn test_display_and_snapshot() {
        let mut board = Board::new(4, 4).unwrap();
        drop_piece(&mut board, 1, Player::PlayerA);
        drop_piece(&mut board, 1, Player::PlayerB);

        assert_eq!(board.to_string(), "....\n....\n.B..\n.A..");
        assert_eq!(Board::from_rows(&["....", "....", ".B..", ".A.."]).unwrap(), board);

        let snapshot = board.snapshot();
        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot[3][1], Cell::PlayerA);
        assert_eq!(snapshot[2][1], Cell::PlayerB);
    }
}
