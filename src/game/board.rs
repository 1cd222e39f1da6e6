use std::ops::Range;

use super::player::Seat;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned tokens needed to win.
pub const WIN_LENGTH: usize = 4;

/// Cells of a winning run as `(row, col)` pairs, in scan order.
pub type WinningLine = [(usize, usize); WIN_LENGTH];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// Seat owning this cell, if any
    pub fn owner(self) -> Option<Seat> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Seat::One),
            Cell::Player2 => Some(Seat::Two),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is outside the board")]
    InvalidColumn(usize),
}

/// The four directions a run can take. Each one knows the step between
/// consecutive cells and which start positions keep the whole run on the
/// board, so no scan ever indexes outside the grid.
#[derive(Debug, Clone, Copy)]
enum Direction {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
    /// Bottom-left to top-right
    DiagonalUp,
    /// Top-left to bottom-right
    DiagonalDown,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUp => (-1, 1),
            Direction::DiagonalDown => (1, 1),
        }
    }

    fn starts(self) -> (Range<usize>, Range<usize>) {
        let span = WIN_LENGTH - 1;
        match self {
            Direction::Horizontal => (0..ROWS, 0..COLS - span),
            Direction::Vertical => (0..ROWS - span, 0..COLS),
            Direction::DiagonalUp => (span..ROWS, 0..COLS - span),
            Direction::DiagonalDown => (0..ROWS - span, 0..COLS - span),
        }
    }

    fn line_from(self, row: usize, col: usize) -> WinningLine {
        let (dr, dc) = self.step();
        let mut line = [(row, col); WIN_LENGTH];
        for (i, cell) in line.iter_mut().enumerate() {
            let i = i as isize;
            *cell = (
                (row as isize + dr * i) as usize,
                (col as isize + dc * i) as usize,
            );
        }
        line
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Number of tokens stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        (0..ROWS)
            .filter(|&row| self.cells[row][col] != Cell::Empty)
            .count()
    }

    /// Total number of tokens on the board
    pub fn token_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Drop a token for `owner` in a column, returns the row where it landed.
    ///
    /// Scans from the bottom row upward and fills the first empty cell. On
    /// error the board is left untouched.
    pub fn drop_token(&mut self, col: usize, owner: Seat) -> Result<usize, DropError> {
        if col >= COLS {
            return Err(DropError::InvalidColumn(col));
        }

        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(DropError::ColumnFull(col))?;

        self.cells[row][col] = owner.to_cell();
        Ok(row)
    }

    /// Check whether `owner` has four consecutive tokens anywhere on the board
    pub fn has_four_in_a_row(&self, owner: Seat) -> bool {
        self.find_four_in_a_row(owner).is_some()
    }

    /// Scan the whole grid for a run of four tokens belonging to `owner`.
    ///
    /// Directions are checked horizontal, vertical, ascending diagonal, then
    /// descending diagonal; the first run found is returned.
    pub fn find_four_in_a_row(&self, owner: Seat) -> Option<WinningLine> {
        let cell = owner.to_cell();

        for direction in Direction::ALL {
            let (rows, cols) = direction.starts();
            for row in rows {
                for col in cols.clone() {
                    let line = direction.line_from(row, col);
                    if line.iter().all(|&(r, c)| self.cells[r][c] == cell) {
                        return Some(line);
                    }
                }
            }
        }

        None
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Read-only copy of the grid for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { cells: self.cells }
    }

    /// Build a board directly from rows of `.`, `1` and `2`, top row first.
    /// Gravity is not enforced.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; ROWS]) -> Self {
        let mut board = Board::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                board.cells[r][c] = match ch {
                    '1' => Cell::Player1,
                    '2' => Cell::Player2,
                    _ => Cell::Empty,
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable view of the grid handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    cells: [[Cell; COLS]; ROWS],
}

impl Snapshot {
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.cells.iter()
    }
}
