//! Core Connect Four game logic: board representation, player types, win
//! detection, and the game state machine with immutable transitions.

mod board;
mod player;
mod state;
mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{Action, GameState};
pub use win::{winning_cells, Highlight, Position};
