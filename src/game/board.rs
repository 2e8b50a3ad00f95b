use std::fmt;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
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

    /// Drop a piece in a column, returning the row where it landed.
    /// Returns `None` when the column is full or out of range — a full
    /// column is a normal boundary condition, not an error.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Option<usize> {
        if self.is_column_full(col) {
            return None;
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Some(row);
            }
        }

        unreachable!("column should not be full if is_column_full returned false");
    }

    /// Clear the topmost piece in a column, returning the row that was
    /// cleared. Exact inverse of `drop_piece`; `None` for an empty column.
    pub fn remove_top(&mut self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        for row in 0..ROWS {
            if self.cells[row][col] != Cell::Empty {
                self.cells[row][col] = Cell::Empty;
                return Some(row);
            }
        }
        None
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
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
                let symbol = match self.cells[row][col] {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
