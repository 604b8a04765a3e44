use std::fmt;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// The 6x7 grid. Row 0 is the top, row 5 the bottom. A non-empty cell
/// always has non-empty cells below it: pieces occupy the lowest empty
/// cell of their column and never move afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// The four line axes as (row, col) unit steps.
const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Clear every cell, returning the board to its starting state.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
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

    /// Drop a piece in a column, returns the row where it landed.
    /// On failure the board is left untouched.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check whether the piece at (row, col) completes four in a row for
    /// `piece`. Every 4-window containing (row, col) is tried on each axis,
    /// so a line is found no matter where in it the piece sits.
    /// Out-of-range coordinates answer false rather than erroring.
    pub fn check_win(&self, row: usize, col: usize, piece: Cell) -> bool {
        if row >= ROWS || col >= COLS || piece == Cell::Empty {
            return false;
        }
        AXES.iter()
            .any(|&(dr, dc)| self.axis_win(row as i32, col as i32, dr, dc, piece))
    }

    fn axis_win(&self, row: i32, col: i32, dr: i32, dc: i32, piece: Cell) -> bool {
        // Windows start up to three cells back along the axis, so the span
        // examined is at most seven cells centered on (row, col).
        for start in -3..=0 {
            let all_match = (0..4).all(|i| {
                let r = row + (start + i) * dr;
                let c = col + (start + i) * dc;
                r >= 0
                    && r < ROWS as i32
                    && c >= 0
                    && c < COLS as i32
                    && self.cells[r as usize][c as usize] == piece
            });
            if all_match {
                return true;
            }
        }
        false
    }

    /// Check whether any completed line exists anywhere on the board.
    pub fn has_winner(&self) -> bool {
        (0..ROWS).any(|row| {
            (0..COLS).any(|col| {
                let cell = self.cells[row][col];
                cell != Cell::Empty && self.check_win(row, col, cell)
            })
        })
    }

    /// A board is terminal when it is won or has no legal moves left.
    /// Search uses this as its recursion base case.
    pub fn is_terminal(&self) -> bool {
        self.has_winner() || self.is_full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                let glyph = match self.cells[row][col] {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "0 1 2 3 4 5 6")
    }
}
