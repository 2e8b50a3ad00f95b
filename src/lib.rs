//! # Connect Four
//!
//! A two-player Connect Four engine with full undo/redo and shareable,
//! replayable games: every move sequence serializes to a compact digit
//! string that reconstructs the game deterministically, paced like a
//! recording. Played through a Ratatui terminal UI.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, state machine
//! - [`share`] — Share-code codec and the pluggable store behind it
//! - [`replay`] — Paced, cancellable replay of a loaded game
//! - [`session`] — Action surface binding state, share store, and replay lock
//! - [`ui`] — Terminal UI: event loop and game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod replay;
pub mod session;
pub mod share;
pub mod ui;
