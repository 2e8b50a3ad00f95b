use super::board::Board;
use super::player::Player;
use super::win::{Highlight, Position};

/// The four recognized game actions. Anything outside this set cannot be
/// dispatched: the enum is exhaustive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Drop the current player's piece in a column. `replay` marks moves
    /// issued by the replay driver, which must not republish the share code.
    Move { column: usize, replay: bool },
    Undo,
    Redo,
    Reset,
}

/// One authoritative snapshot of the game.
///
/// `history` holds every recorded half-move as a column index; `cursor`
/// partitions it into an applied prefix and a redoable suffix. Invariants:
/// `cursor <= history.len()`, the board always equals
/// `history[0..cursor]` applied to an empty board, and the current player's
/// parity matches the cursor (Red moves at even cursors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    highlight: Highlight,
    current_player: Player,
    history: Vec<usize>,
    cursor: usize,
}

impl GameState {
    /// Empty board, Red to move, no history.
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            highlight: Highlight::default(),
            current_player: Player::Red,
            history: Vec::new(),
            cursor: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Game over is derived from the highlight mask, never stored.
    pub fn is_over(&self) -> bool {
        self.highlight.any()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.history.len()
    }

    /// Pure transition: build the successor state without touching `self`.
    /// Rejected transitions (move after game over, full or out-of-range
    /// column, undo at the start, redo at the end) return an unchanged
    /// clone, so callers can detect them by equality.
    pub fn apply(&self, action: Action) -> GameState {
        match action {
            Action::Move { column, .. } => self.apply_move(column),
            Action::Undo => self.apply_undo(),
            Action::Redo => self.apply_redo(),
            Action::Reset => GameState::initial(),
        }
    }

    fn apply_move(&self, column: usize) -> GameState {
        if self.is_over() {
            return self.clone();
        }

        let mut board = self.board;
        let Some(row) = board.drop_piece(column, self.current_player.to_cell()) else {
            return self.clone();
        };

        // Incremental detection seeded at the new piece, merged into the
        // prior mask. Moves after game over are rejected above, so a mark
        // can never need clearing here.
        let highlight = Highlight::around(&board, Position { row, col: column }, self.highlight);

        // A new move overwrites any redo branch beyond the cursor.
        let mut history = self.history[..self.cursor].to_vec();
        history.push(column);
        let cursor = history.len();

        GameState {
            board,
            highlight,
            current_player: self.current_player.other(),
            history,
            cursor,
        }
    }

    fn apply_undo(&self) -> GameState {
        if self.cursor == 0 {
            return self.clone();
        }

        let column = self.history[self.cursor - 1];
        let mut board = self.board;
        if board.remove_top(column).is_none() {
            unreachable!("history column {column} must hold a piece to undo");
        }

        GameState {
            board,
            highlight: Highlight::scan(&board),
            current_player: self.current_player.other(),
            history: self.history.clone(),
            cursor: self.cursor - 1,
        }
    }

    fn apply_redo(&self) -> GameState {
        if self.cursor == self.history.len() {
            return self.clone();
        }

        let column = self.history[self.cursor];
        let mut board = self.board;
        if board.drop_piece(column, self.current_player.to_cell()).is_none() {
            unreachable!("redoable column {column} was legal when recorded");
        }

        GameState {
            board,
            highlight: Highlight::scan(&board),
            current_player: self.current_player.other(),
            history: self.history.clone(),
            cursor: self.cursor + 1,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
