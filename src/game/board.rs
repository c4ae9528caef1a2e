use crate::error::MoveError;

use super::player::Player;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player holding this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Gravity-filled grid. Row 0 is the top, row `rows - 1` is the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board must have at least one row and column");
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Signed bounds check used when walking away from a cell.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        !self.get(0, col).is_empty()
    }

    /// Row a piece dropped into `col` would land on, or `None` when the
    /// column is full.
    pub fn lowest_empty_row(&self, col: usize) -> Result<Option<usize>, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }
        Ok((0..self.rows).rev().find(|&row| self.get(row, col).is_empty()))
    }

    /// Set a cell. The caller must have resolved the row through
    /// [`Board::lowest_empty_row`]; writing to an occupied cell is a bug.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        let idx = self.index(row, col);
        assert!(
            self.cells[idx].is_empty(),
            "cell ({row}, {col}) is already occupied"
        );
        self.cells[idx] = player.to_cell();
    }

    /// Undo a hypothetical placement.
    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = Cell::Empty;
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        let row = self
            .lowest_empty_row(col)?
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.place(row, col, player);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.get(0, col).is_empty())
    }

    /// Columns that can still take a piece, left to right.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        for row in 0..DEFAULT_ROWS {
            for col in 0..DEFAULT_COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        let row = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        let row = board.drop_piece(3, Player::Yellow).unwrap();
        assert_eq!(row, 4); // Lands on top of the first piece
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_lowest_empty_row() {
        let mut board = Board::default();
        assert_eq!(board.lowest_empty_row(0), Ok(Some(5)));
        board.drop_piece(0, Player::Red).unwrap();
        assert_eq!(board.lowest_empty_row(0), Ok(Some(4)));
        assert_eq!(
            board.lowest_empty_row(7),
            Err(MoveError::InvalidColumn { column: 7, cols: 7 })
        );
    }

    #[test]
    fn test_column_takes_exactly_rows_pieces() {
        let mut board = Board::default();

        for expected in (0..DEFAULT_ROWS).rev() {
            assert_eq!(board.drop_piece(0, Player::Red), Ok(expected));
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.lowest_empty_row(0), Ok(None));
        assert_eq!(
            board.drop_piece(0, Player::Yellow),
            Err(MoveError::ColumnFull { column: 0 })
        );
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(
            board.drop_piece(7, Player::Red),
            Err(MoveError::InvalidColumn { column: 7, cols: 7 })
        );
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::default();
        for col in 0..DEFAULT_COLS {
            assert!(!board.is_full());
            for _ in 0..DEFAULT_ROWS {
                board.drop_piece(col, Player::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_is_full_matches_every_column_full() {
        let mut board = Board::new(4, 5);
        let order = [2, 0, 4, 1, 3, 2, 2, 0, 1, 4, 3, 3, 1, 0, 4, 2, 1, 0, 3, 4];
        for (i, &col) in order.iter().enumerate() {
            let player = if i % 2 == 0 { Player::Red } else { Player::Yellow };
            board.drop_piece(col, player).unwrap();
            let all_none = (0..board.cols()).all(|c| board.lowest_empty_row(c) == Ok(None));
            assert_eq!(board.is_full(), all_none, "after move {i}");
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_legal_columns_skip_full() {
        let mut board = Board::default();
        for _ in 0..DEFAULT_ROWS {
            board.drop_piece(2, Player::Yellow).unwrap();
        }
        assert_eq!(board.legal_columns(), vec![0, 1, 3, 4, 5, 6]);
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_place_on_occupied_cell_panics() {
        let mut board = Board::default();
        board.place(5, 0, Player::Red);
        board.place(5, 0, Player::Yellow);
    }

    #[test]
    fn test_clear_and_reset() {
        let mut board = Board::default();
        let row = board.drop_piece(4, Player::Red).unwrap();
        board.clear(row, 4);
        assert_eq!(board.get(row, 4), Cell::Empty);

        board.drop_piece(1, Player::Red).unwrap();
        board.drop_piece(1, Player::Yellow).unwrap();
        board.reset();
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_custom_dimensions() {
        let board = Board::new(8, 9);
        assert_eq!(board.rows(), 8);
        assert_eq!(board.cols(), 9);
        assert_eq!(board.lowest_empty_row(8), Ok(Some(7)));
        assert!(board.contains(7, 8));
        assert!(!board.contains(8, 0));
        assert!(!board.contains(0, -1));
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::Red.owner(), Some(Player::Red));
        assert_eq!(Cell::Yellow.owner(), Some(Player::Yellow));
    }
}
