//! Location snapshot

use serde::{Deserialize, Serialize};

use super::cursor::Cursor;

/// Immutable `{offset, line, column}` sample of a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Character offset, 0-based
    pub offset: usize,
    /// Line, starting at the cursor's baseline
    pub line: usize,
    /// Column, starting at the cursor's baseline
    pub column: usize,
}

impl Location {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Sample the cursor as it is right now
    pub fn capture<C: Cursor + ?Sized>(cursor: &C) -> Self {
        Self::new(cursor.offset(), cursor.line(), cursor.column())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
