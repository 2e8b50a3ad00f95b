//! Shareable game codes: a move history serialized as one decimal digit per
//! half-move (valid while the board is under ten columns wide), plus the
//! store abstraction the engine publishes them through.

use std::fmt::Write;

/// Serialize a history to its share code, e.g. `[3, 2, 3, 4]` → `"3234"`.
pub fn encode(history: &[usize]) -> String {
    let mut code = String::with_capacity(history.len());
    for &column in history {
        debug_assert!(column < 10, "share codes are one digit per move");
        let _ = write!(code, "{column}");
    }
    code
}

/// Parse a share code back into a history of column indices.
///
/// A code containing anything but decimal digits is treated the same as a
/// missing one: the result is an empty history, never an error. Digits that
/// exceed the board width pass through; the state machine rejects them as
/// ordinary out-of-range moves during replay.
pub fn decode(code: &str) -> Vec<usize> {
    code.chars()
        .map(|c| c.to_digit(10).map(|d| d as usize))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}

/// Where published games live. The engine only ever talks to this trait, so
/// the medium behind it (process memory, a file, a URL parameter) is
/// swappable.
pub trait ShareStore {
    /// Replace the stored code with the given history. Replacement, not
    /// append: undo/redo/move churn must not pile up stale codes.
    fn publish(&mut self, history: &[usize]);

    /// Decode the stored code. Missing or malformed stores load as empty.
    fn load(&self) -> Vec<usize>;
}

/// In-process share store holding the encoded code directly.
#[derive(Debug, Clone, Default)]
pub struct MemoryShare {
    code: Option<String>,
}

impl MemoryShare {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an externally supplied code (e.g. from the CLI).
    pub fn with_code(code: impl Into<String>) -> Self {
        MemoryShare {
            code: Some(code.into()),
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl ShareStore for MemoryShare {
    fn publish(&mut self, history: &[usize]) {
        self.code = Some(encode(history));
    }

    fn load(&self) -> Vec<usize> {
        self.code.as_deref().map(decode).unwrap_or_default()
    }
}
