//! Four-in-a-row detection around the cell that was just played.

use super::{Board, Player};

/// Minimum run length that wins the game.
pub const CONNECT: usize = 4;

/// The four line directions, as (row step, column step).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Axis {
    /// Search order. The first qualifying axis is the one reported.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDownRight,
        Axis::DiagonalDownLeft,
    ];

    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDownRight => (1, 1),
            Axis::DiagonalDownLeft => (1, -1),
        }
    }
}

/// A contiguous run of at least [`CONNECT`] cells owned by one player.
/// Cells are ordered from the negative end of the axis to the positive end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    player: Player,
    axis: Axis,
    cells: Vec<(usize, usize)>,
}

impl WinningLine {
    pub fn player(&self) -> Player {
        self.player
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Look for a winning run through `(row, col)`.
///
/// Only the just-played cell is examined, so this is not a full-board scan.
/// Returns `None` for an empty origin cell.
pub fn find_winning_line(board: &Board, row: usize, col: usize) -> Option<WinningLine> {
    let player = board.get(row, col).owner()?;

    Axis::ALL.into_iter().find_map(|axis| {
        let cells = run_through(board, row, col, player, axis);
        (cells.len() >= CONNECT).then(|| WinningLine {
            player,
            axis,
            cells,
        })
    })
}

/// Contiguous cells owned by `player` along `axis`, origin included.
fn run_through(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
    axis: Axis,
) -> Vec<(usize, usize)> {
    let (dr, dc) = axis.step();
    let backward = walk(board, row, col, -dr, -dc, player);
    let forward = walk(board, row, col, dr, dc, player);

    let mut cells = Vec::with_capacity(backward.len() + 1 + forward.len());
    cells.extend(backward.into_iter().rev());
    cells.push((row, col));
    cells.extend(forward);
    cells
}

fn walk(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    player: Player,
) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;
    while board.contains(r, c) && board.get(r as usize, c as usize) == player.to_cell() {
        cells.push((r as usize, c as usize));
        r += dr;
        c += dc;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid_line(board: &Board, line: &WinningLine) {
        assert!(line.len() >= CONNECT);
        let (dr, dc) = line.axis().step();
        for pair in line.cells().windows(2) {
            let (r0, c0) = pair[0];
            let (r1, c1) = pair[1];
            assert_eq!(r1 as isize - r0 as isize, dr);
            assert_eq!(c1 as isize - c0 as isize, dc);
        }
        for &(r, c) in line.cells() {
            assert_eq!(board.get(r, c), line.player().to_cell());
        }
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        for col in 0..4 {
            board.drop_piece(col, Player::Red).unwrap();
        }
        // Check from the middle of the line
        let line = find_winning_line(&board, 5, 2).unwrap();
        assert_eq!(line.axis(), Axis::Horizontal);
        assert_eq!(line.player(), Player::Red);
        assert_eq!(line.cells(), &[(5, 0), (5, 1), (5, 2), (5, 3)]);
        assert_valid_line(&board, &line);
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.drop_piece(3, Player::Yellow).unwrap();
        }
        let line = find_winning_line(&board, 2, 3).unwrap();
        assert_eq!(line.axis(), Axis::Vertical);
        assert_eq!(line.cells(), &[(2, 3), (3, 3), (4, 3), (5, 3)]);
        assert_valid_line(&board, &line);
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let mut board = Board::default();
        // Rising / pattern from (5,0) to (2,3)
        board.drop_piece(0, Player::Red).unwrap();

        board.drop_piece(1, Player::Yellow).unwrap();
        board.drop_piece(1, Player::Red).unwrap();

        board.drop_piece(2, Player::Yellow).unwrap();
        board.drop_piece(2, Player::Yellow).unwrap();
        board.drop_piece(2, Player::Red).unwrap();

        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        let row = board.drop_piece(3, Player::Red).unwrap();

        let line = find_winning_line(&board, row, 3).unwrap();
        assert_eq!(line.axis(), Axis::DiagonalDownLeft);
        assert_eq!(line.cells(), &[(2, 3), (3, 2), (4, 1), (5, 0)]);
        assert_valid_line(&board, &line);
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let mut board = Board::default();
        // Falling \ pattern from (2,3) to (5,6)
        board.drop_piece(6, Player::Red).unwrap();

        board.drop_piece(5, Player::Yellow).unwrap();
        board.drop_piece(5, Player::Red).unwrap();

        board.drop_piece(4, Player::Yellow).unwrap();
        board.drop_piece(4, Player::Yellow).unwrap();
        board.drop_piece(4, Player::Red).unwrap();

        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        let row = board.drop_piece(3, Player::Red).unwrap();

        let line = find_winning_line(&board, row, 3).unwrap();
        assert_eq!(line.axis(), Axis::DiagonalDownRight);
        assert_eq!(line.cells(), &[(2, 3), (3, 4), (4, 5), (5, 6)]);
        assert_valid_line(&board, &line);
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(col, Player::Red).unwrap();
        }
        assert_eq!(find_winning_line(&board, 5, 1), None);
    }

    #[test]
    fn test_run_is_not_padded_and_stops_at_mismatch() {
        let mut board = Board::default();
        for col in 0..5 {
            board.drop_piece(col, Player::Yellow).unwrap();
        }
        board.drop_piece(5, Player::Red).unwrap();
        board.drop_piece(6, Player::Yellow).unwrap();

        let line = find_winning_line(&board, 5, 4).unwrap();
        assert_eq!(line.len(), 5);
        assert!(!line.contains(5, 6));
        assert_eq!(line.cells().first(), Some(&(5, 0)));
        assert_eq!(line.cells().last(), Some(&(5, 4)));
    }

    #[test]
    fn test_first_axis_in_order_is_reported() {
        let mut board = Board::default();
        // Red completes both a row and a column at (2, 3)
        for _ in 0..3 {
            board.drop_piece(3, Player::Red).unwrap();
        }
        for col in [0, 1, 2] {
            for _ in 0..3 {
                board.drop_piece(col, Player::Yellow).unwrap();
            }
            board.drop_piece(col, Player::Red).unwrap();
        }
        let row = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(row, 2);

        let line = find_winning_line(&board, row, 3).unwrap();
        assert_eq!(line.axis(), Axis::Horizontal);
        assert_eq!(line.cells(), &[(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_empty_origin_has_no_line() {
        let board = Board::default();
        assert_eq!(find_winning_line(&board, 5, 3), None);
    }
}
