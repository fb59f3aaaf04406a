use crate::domain::ui::{CursorPosition, TextSelection};

/// Complete state representation of a single-line TextArea
/// This struct encapsulates all mutable state that needs to be
/// preserved across TextArea recreation in the stateless approach
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextAreaState {
    /// The complete text content
    pub content: String,
    /// Current cursor position within the text
    pub cursor_position: CursorPosition,
    /// Active text selection range, if any
    pub selection: Option<TextSelection>,
}

impl TextAreaState {
    pub fn new(
        content: String,
        cursor_position: CursorPosition,
        selection: Option<TextSelection>,
    ) -> Self {
        Self {
            content,
            cursor_position,
            selection,
        }
    }

    /// Content with the cursor placed after the last character
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let column = content.chars().count();
        Self::new(content, CursorPosition::at_column(column), None)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Cursor column measured in characters
    pub fn cursor_column(&self) -> usize {
        self.cursor_position.column
    }

    /// Collapses any line breaks so the buffer stays single-line
    pub fn into_single_line(mut self) -> Self {
        if self.content.contains('\n') {
            self.content = self.content.replace(['\r', '\n'], "");
            let column = self.content.chars().count();
            self.cursor_position = CursorPosition::at_column(column);
            self.selection = None;
        }
        self
    }
}
