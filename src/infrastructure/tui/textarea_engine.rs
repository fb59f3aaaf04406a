use crossterm::event::{Event, KeyEvent};
use tui_textarea::TextArea;

use crate::{
    core::{state::textarea::TextAreaState, textarea_engine::TextAreaEngine},
    domain::ui::{CursorPosition, TextSelection},
};

/// Field editor backed by tui-textarea. Each call builds a throwaway TextArea
/// from the stored buffer, feeds it the keys, and reads the buffer back.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn restore_textarea_from_snapshot(textarea: &mut TextArea<'_>, snapshot: &TextAreaState) {
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        textarea.move_cursor(tui_textarea::CursorMove::Jump(
            snapshot.cursor_position.line as u16,
            snapshot.cursor_position.column as u16,
        ));
        if let Some(sel) = &snapshot.selection {
            Self::restore_selection(textarea, sel);
        }
    }

    fn extract_cursor_position(textarea: &tui_textarea::TextArea<'_>) -> CursorPosition {
        let (line, column) = textarea.cursor();
        CursorPosition { line, column }
    }

    fn extract_selection(textarea: &tui_textarea::TextArea<'_>) -> Option<TextSelection> {
        textarea.selection_range().map(|((sr, sc), (er, ec))| TextSelection {
            start: CursorPosition { line: sr, column: sc },
            end: CursorPosition { line: er, column: ec },
        })
    }

    fn restore_selection(textarea: &mut TextArea<'_>, selection: &TextSelection) {
        textarea.move_cursor(tui_textarea::CursorMove::Jump(
            selection.start.line as u16,
            selection.start.column as u16,
        ));
        textarea.start_selection();
        textarea.move_cursor(tui_textarea::CursorMove::Jump(
            selection.end.line as u16,
            selection.end.column as u16,
        ));
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = TextArea::default();
        Self::restore_textarea_from_snapshot(&mut textarea, snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        let content = textarea.lines().join("\n");
        let cursor = Self::extract_cursor_position(&textarea);
        let selection = Self::extract_selection(&textarea);
        TextAreaState::new(content, cursor, selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn inserts_at_cursor() {
        let engine = TuiTextAreaEngine;
        let snap = TextAreaState::new("A1".into(), CursorPosition::at_column(2), None);
        let out = engine.apply_keys(&snap, &[press(KeyCode::Left), press(KeyCode::Char('B'))]);
        assert_eq!(out.content, "AB1");
        assert_eq!(out.cursor_position, CursorPosition::at_column(2));
        // input snapshot is left alone
        assert_eq!(snap.content, "A1");
    }

    #[test]
    fn backspace_and_delete() {
        let engine = TuiTextAreaEngine;
        let snap = TextAreaState::with_content("12.50");
        let out = engine.apply_keys(&snap, &[press(KeyCode::Backspace)]);
        assert_eq!(out.content, "12.5");
        assert_eq!(out.cursor_column(), 4);

        let start = TextAreaState::new("12.50".into(), CursorPosition::at_column(0), None);
        let out = engine.apply_keys(&start, &[press(KeyCode::Delete)]);
        assert_eq!(out.content, "2.50");
    }

    #[test]
    fn selection_is_replaced() {
        let engine = TuiTextAreaEngine;
        let snap = TextAreaState::new(
            "Garage".into(),
            CursorPosition::at_column(6),
            Some(TextSelection {
                start: CursorPosition::at_column(1),
                end: CursorPosition::at_column(5),
            }),
        );
        let out = engine.apply_keys(&snap, &[press(KeyCode::Backspace)]);
        assert_eq!(out.content, "Ge");
        assert_eq!(out.cursor_position, CursorPosition::at_column(1));
    }
}
