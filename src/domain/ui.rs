use serde::{Deserialize, Serialize};

/// Canonical cursor position type used across UI domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    /// Cursor on the first line at the given column
    pub fn at_column(column: usize) -> Self {
        Self { line: 0, column }
    }
}

/// Text selection range within a text buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: CursorPosition,
    pub end: CursorPosition,
}
