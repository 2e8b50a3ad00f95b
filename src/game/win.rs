//! Win detection: scan outward from a placed piece along four axes and
//! collect every cell belonging to a four-in-a-row, as a boolean mask
//! overlaying the board.

use super::board::{Board, Cell, COLS, ROWS};

/// A cell position on the board. Row 0 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// The four axes a connect-four line can lie on, as (d_col, d_row) steps.
/// Each is walked in both directions from the origin.
const AXES: [(i32, i32); 4] = [(-1, 0), (0, -1), (-1, -1), (-1, 1)];

/// Collect every cell of every winning line through `origin`.
///
/// For each axis, walk outward from `origin` in both directions while cells
/// match the origin's value, stopping at the board edge or a differing cell
/// (Empty included). The axis contributes its visited cells plus the origin
/// only when the contiguous run reaches four. Returns an empty set when the
/// origin cell is Empty or no axis reaches four. Cells where axes intersect
/// may appear more than once; the mask union absorbs duplicates.
pub fn winning_cells(board: &Board, origin: Position) -> Vec<Position> {
    let target = board.get(origin.row, origin.col);
    if target == Cell::Empty {
        return Vec::new();
    }

    let mut winning = Vec::new();

    for (dc, dr) in AXES {
        let mut run = vec![origin];

        for sign in [1i32, -1] {
            let (step_c, step_r) = (dc * sign, dr * sign);
            let mut col = origin.col as i32 + step_c;
            let mut row = origin.row as i32 + step_r;

            while row >= 0
                && row < ROWS as i32
                && col >= 0
                && col < COLS as i32
                && board.get(row as usize, col as usize) == target
            {
                run.push(Position {
                    row: row as usize,
                    col: col as usize,
                });
                col += step_c;
                row += step_r;
            }
        }

        if run.len() >= 4 {
            winning.extend(run);
        }
    }

    winning
}

/// Boolean overlay marking the cells of every detected winning line.
/// Always recomputable from the board; never a source of truth on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlight {
    cells: [[bool; COLS]; ROWS],
}

impl Highlight {
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// True if any cell is marked — the game-over predicate.
    pub fn any(&self) -> bool {
        self.cells.iter().flatten().any(|&marked| marked)
    }

    /// Number of marked cells.
    pub fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&marked| marked).count()
    }

    fn mark(&mut self, positions: &[Position]) {
        for pos in positions {
            self.cells[pos.row][pos.col] = true;
        }
    }

    /// Seed detection at `origin` and merge the result into `base`.
    /// The incremental path used after a move: a line marked earlier stays
    /// marked even though the scan only looks around the new piece.
    pub fn around(board: &Board, origin: Position, base: Highlight) -> Highlight {
        let mut mask = base;
        mask.mark(&winning_cells(board, origin));
        mask
    }

    /// Recompute the mask from scratch by scanning every occupied cell.
    /// Used after undo/redo, where a removed piece may have broken a line;
    /// a full rescan beats tracking which marks depended on which piece at
    /// this board size.
    pub fn scan(board: &Board) -> Highlight {
        let mut mask = Highlight::default();
        for row in 0..ROWS {
            for col in 0..COLS {
                if board.get(row, col) != Cell::Empty {
                    mask.mark(&winning_cells(board, Position { row, col }));
                }
            }
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop(board: &mut Board, col: usize, cell: Cell) -> Position {
        let row = board.drop_piece(col, cell).unwrap();
        Position { row, col }
    }

    #[test]
    fn test_empty_origin_no_cells() {
        let board = Board::new();
        assert!(winning_cells(&board, Position { row: 5, col: 3 }).is_empty());
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let mut board = Board::new();
        let mut last = Position { row: 0, col: 0 };
        for col in 0..3 {
            last = drop(&mut board, col, Cell::Red);
        }
        assert!(winning_cells(&board, last).is_empty());
        assert!(!Highlight::scan(&board).any());
    }

    #[test]
    fn test_horizontal_win_from_middle() {
        let mut board = Board::new();
        for col in 0..4 {
            drop(&mut board, col, Cell::Red);
        }

        // Detection must work from any cell of the line, not just the ends.
        let cells = winning_cells(&board, Position { row: 5, col: 2 });
        assert_eq!(cells.len(), 4);
        for col in 0..4 {
            assert!(cells.contains(&Position { row: 5, col }));
        }
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        let mut last = Position { row: 0, col: 0 };
        for _ in 0..4 {
            last = drop(&mut board, 3, Cell::Yellow);
        }

        let mask = Highlight::around(&board, last, Highlight::default());
        assert_eq!(mask.count(), 4);
        for row in 2..6 {
            assert!(mask.is_set(row, 3));
        }
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        drop(&mut board, 0, Cell::Red);

        drop(&mut board, 1, Cell::Yellow);
        drop(&mut board, 1, Cell::Red);

        drop(&mut board, 2, Cell::Yellow);
        drop(&mut board, 2, Cell::Yellow);
        drop(&mut board, 2, Cell::Red);

        drop(&mut board, 3, Cell::Yellow);
        drop(&mut board, 3, Cell::Yellow);
        drop(&mut board, 3, Cell::Yellow);
        let last = drop(&mut board, 3, Cell::Red);

        let cells = winning_cells(&board, last);
        assert_eq!(cells.len(), 4);
        assert!(cells.contains(&Position { row: 5, col: 0 }));
        assert!(cells.contains(&Position { row: 2, col: 3 }));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        drop(&mut board, 6, Cell::Red);

        drop(&mut board, 5, Cell::Yellow);
        drop(&mut board, 5, Cell::Red);

        drop(&mut board, 4, Cell::Yellow);
        drop(&mut board, 4, Cell::Yellow);
        drop(&mut board, 4, Cell::Red);

        drop(&mut board, 3, Cell::Yellow);
        drop(&mut board, 3, Cell::Yellow);
        drop(&mut board, 3, Cell::Yellow);
        let last = drop(&mut board, 3, Cell::Red);

        let cells = winning_cells(&board, last);
        assert_eq!(cells.len(), 4);
        assert!(cells.contains(&Position { row: 5, col: 6 }));
    }

    #[test]
    fn test_run_longer_than_four_marks_all() {
        let mut board = Board::new();
        for col in 1..6 {
            drop(&mut board, col, Cell::Red);
        }

        let cells = winning_cells(&board, Position { row: 5, col: 3 });
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn test_around_preserves_prior_marks() {
        let mut board = Board::new();
        for col in 0..4 {
            drop(&mut board, col, Cell::Red);
        }
        let won = Highlight::scan(&board);
        assert!(won.any());

        // Seeding around an unrelated piece must not unmark the line.
        let pos = drop(&mut board, 6, Cell::Yellow);
        let merged = Highlight::around(&board, pos, won);
        assert_eq!(merged, won);
    }

    #[test]
    fn test_scan_matches_seeded_detection() {
        let mut board = Board::new();
        let mut last = Position { row: 0, col: 0 };
        for _ in 0..4 {
            last = drop(&mut board, 0, Cell::Red);
        }

        let seeded = Highlight::around(&board, last, Highlight::default());
        assert_eq!(Highlight::scan(&board), seeded);
    }
}
