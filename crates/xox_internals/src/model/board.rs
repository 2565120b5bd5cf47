//! The 3x3 Xox board.

use crate::error::ModelAccessError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// One of the two fixed player slots of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Seat {
    /// Creator of the game, moves first.
    First,
    /// Moves second.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Slot index of this seat (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Seat for a slot index, `None` for anything but 0 and 1.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::First),
            1 => Some(Seat::Second),
            _ => None,
        }
    }
}

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody claimed the cell yet.
    Empty,
    /// Claimed by the player on the given seat.
    Occupied(Seat),
}

/// All rows, columns and diagonals as `(x, y)` triples.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Columns
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// 3x3 grid of cells, origin top-left.
///
/// Cells are stored column-major (`cells[x][y]`). A cell never returns to
/// [`Cell::Empty`] once claimed; the only mutation is [`Board::occupy`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// True if no cell has been claimed.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, _, cell)| cell == Cell::Empty)
    }

    /// True if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.iter().all(|(_, _, cell)| cell != Cell::Empty)
    }

    /// True if the cell exists and is empty.
    pub fn is_free(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// Cell at `(x, y)`, `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get(x).and_then(|column| column.get(y)).copied()
    }

    /// Copy of the grid, indexed `[x][y]`.
    pub fn cells(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
    }

    /// Iterates all cells in row-major order (`y` outer, `x` inner).
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|y| (0..BOARD_SIZE).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[x][y]))
    }

    /// True if some row, column or diagonal is held by a single player.
    pub fn is_three_in_a_line(&self) -> bool {
        self.line_owner().is_some()
    }

    /// Seat owning the first completed line found, if any.
    #[instrument(skip(self))]
    pub fn line_owner(&self) -> Option<Seat> {
        for [a, b, c] in LINES {
            let cell = self.cells[a.0][a.1];
            if let Cell::Occupied(seat) = cell {
                if cell == self.cells[b.0][b.1] && cell == self.cells[c.0][c.1] {
                    debug!(?seat, "Completed line found");
                    return Some(seat);
                }
            }
        }
        None
    }

    /// Claims the cell at `(x, y)` for `seat`.
    ///
    /// Fails without touching the board if the coordinates are outside the
    /// grid or the cell is already claimed.
    #[instrument(skip(self))]
    pub fn occupy(&mut self, x: usize, y: usize, seat: Seat) -> Result<(), ModelAccessError> {
        match self.get(x, y) {
            None => Err(ModelAccessError::new(format!(
                "Cell ({}, {}) is not on the board",
                x, y
            ))),
            Some(Cell::Occupied(owner)) => Err(ModelAccessError::new(format!(
                "Cell ({}, {}) is already occupied by {}",
                x, y, owner
            ))),
            Some(Cell::Empty) => {
                self.cells[x][y] = Cell::Occupied(seat);
                debug!(x, y, ?seat, "Cell occupied");
                Ok(())
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let symbol = match self.cells[x][y] {
                    Cell::Empty => '.',
                    Cell::Occupied(Seat::First) => 'X',
                    Cell::Occupied(Seat::Second) => 'O',
                };
                write!(f, "{}", symbol)?;
                if x < BOARD_SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if y < BOARD_SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert!(board.is_free(2, 2));
        assert_eq!(board.line_owner(), None);
    }

    #[test]
    fn test_occupy_taken_cell_fails_and_keeps_board() {
        let mut board = Board::new();
        board.occupy(1, 1, Seat::First).expect("empty cell");
        let before = board.clone();

        assert!(board.occupy(1, 1, Seat::Second).is_err());
        assert_eq!(board, before);
        assert_eq!(board.get(1, 1), Some(Cell::Occupied(Seat::First)));
    }

    #[test]
    fn test_occupy_out_of_bounds_fails() {
        let mut board = Board::new();
        assert!(board.occupy(3, 0, Seat::First).is_err());
        assert!(board.occupy(0, 3, Seat::First).is_err());
        assert!(board.is_empty());
        assert!(!board.is_free(3, 3));
    }

    #[test]
    fn test_cells_is_a_copy() {
        let mut board = Board::new();
        let mut snapshot = board.cells();
        snapshot[0][0] = Cell::Occupied(Seat::Second);
        assert!(board.is_free(0, 0));

        board.occupy(2, 0, Seat::First).expect("empty cell");
        assert_eq!(board.cells()[2][0], Cell::Occupied(Seat::First));
        assert_eq!(snapshot[2][0], Cell::Empty);
    }

    #[test]
    fn test_column_win() {
        let mut board = Board::new();
        for y in 0..3 {
            board.occupy(1, y, Seat::First).expect("empty cell");
        }
        assert!(board.is_three_in_a_line());
        assert_eq!(board.line_owner(), Some(Seat::First));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut board = Board::new();
        board.occupy(2, 0, Seat::Second).expect("empty cell");
        board.occupy(1, 1, Seat::Second).expect("empty cell");
        board.occupy(0, 2, Seat::Second).expect("empty cell");
        assert_eq!(board.line_owner(), Some(Seat::Second));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.occupy(0, 0, Seat::First).expect("empty cell");
        board.occupy(1, 0, Seat::Second).expect("empty cell");
        board.occupy(2, 0, Seat::First).expect("empty cell");
        assert!(!board.is_three_in_a_line());
    }

    #[test]
    fn test_iter_is_row_major() {
        let board = Board::new();
        let order: Vec<_> = board.iter().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(order[0], (0, 0));
        assert_eq!(order[1], (1, 0));
        assert_eq!(order[3], (0, 1));
        assert_eq!(order[8], (2, 2));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.occupy(0, 0, Seat::First).expect("empty cell");
        board.occupy(2, 2, Seat::Second).expect("empty cell");
        assert_eq!(board.to_string(), "X|.|.\n-+-+-\n.|.|.\n-+-+-\n.|.|O");
    }

    #[test]
    fn test_seat_index_round_trip() {
        assert_eq!(Seat::from_index(Seat::Second.index()), Some(Seat::Second));
        assert_eq!(Seat::from_index(2), None);
        assert_eq!(Seat::First.opponent(), Seat::Second);
    }
}
