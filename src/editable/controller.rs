//! Shift tracking and key-to-edit mapping for selection.
//!
//! Rules:
//! - Shift down anchors a selection at the cursor unless one exists.
//! - Shift up keeps the anchor; the next plain movement drops it.
//! - A plain Left/Right snaps to the selection edge; Up/Down/Home/End and
//!   page moves go from the raw cursor.

use super::buffer::TextBuffer;
use super::keys::KeyName;
use super::layout::{Rect, TextLayout};
use super::measure::TextMeasure;
use super::messages::{MoveTarget, TextEditMsg};
use super::selection::RowRange;
use super::state::EditableState;

/// Tracks which Shift keys are held and turns keys into [`TextEditMsg`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionController {
    shift_left: bool,
    shift_right: bool,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while either Shift key is held
    pub fn is_selecting(&self) -> bool {
        self.shift_left || self.shift_right
    }

    /// Handle a physical key press. Returns true for Shift keys.
    pub fn key_down<B: TextBuffer>(&mut self, key: KeyName, state: &mut EditableState<B>) -> bool {
        match key {
            KeyName::ShiftLeft => self.shift_left = true,
            KeyName::ShiftRight => self.shift_right = true,
            _ => return false,
        }
        state.begin_selection();
        true
    }

    /// Handle a physical key release. The anchor survives.
    pub fn key_up(&mut self, key: KeyName) -> bool {
        match key {
            KeyName::ShiftLeft => self.shift_left = false,
            KeyName::ShiftRight => self.shift_right = false,
            _ => return false,
        }
        true
    }

    /// Forget held modifiers (focus loss)
    pub fn release_all(&mut self) {
        self.shift_left = false;
        self.shift_right = false;
    }

    /// The edit a typed key stands for, given the current Shift state
    pub fn message_for_key(&self, key: KeyName) -> Option<TextEditMsg> {
        let target = match key {
            KeyName::Left => MoveTarget::Left,
            KeyName::Right => MoveTarget::Right,
            KeyName::Up => MoveTarget::Up,
            KeyName::Down => MoveTarget::Down,
            KeyName::Home => MoveTarget::LineStart,
            KeyName::End => MoveTarget::LineEnd,
            KeyName::PageUp => MoveTarget::PageUp,
            KeyName::PageDown => MoveTarget::PageDown,
            KeyName::Backspace => return Some(TextEditMsg::DeleteBackward),
            KeyName::Delete => return Some(TextEditMsg::DeleteForward),
            KeyName::Return | KeyName::Enter => return Some(TextEditMsg::InsertNewline),
            KeyName::Tab | KeyName::Escape | KeyName::ShiftLeft | KeyName::ShiftRight => {
                return None
            }
        };

        if self.is_selecting() {
            Some(TextEditMsg::MoveWithSelection(target))
        } else {
            Some(TextEditMsg::Move(target))
        }
    }

    /// Selected columns per row: partial first and last rows, full rows
    /// in between. Empty when nothing is selected.
    pub fn selection_ranges<B: TextBuffer>(state: &EditableState<B>) -> Vec<RowRange> {
        let Some(sel) = state.selection() else {
            return Vec::new();
        };
        let (start, end) = (sel.start(), sel.end());
        let buffer = state.buffer();

        if start.line == end.line {
            return vec![RowRange {
                line: start.line,
                start: start.column,
                end: end.column,
            }];
        }

        let mut ranges = Vec::with_capacity(end.line - start.line + 1);
        ranges.push(RowRange {
            line: start.line,
            start: start.column,
            end: buffer.line_length(start.line),
        });
        for line in start.line + 1..end.line {
            ranges.push(RowRange {
                line,
                start: 0,
                end: buffer.line_length(line),
            });
        }
        ranges.push(RowRange {
            line: end.line,
            start: 0,
            end: end.column,
        });
        ranges
    }

    /// Highlight rectangles for the current selection in `layout`
    pub fn highlight_rects<B: TextBuffer>(
        state: &EditableState<B>,
        layout: &TextLayout,
        measure: &dyn TextMeasure,
    ) -> Vec<Rect> {
        layout.highlight_rects(measure, &Self::selection_ranges(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::{EditConstraints, Position, RopeBuffer};

    fn state(text: &str) -> EditableState<RopeBuffer> {
        EditableState::new(RopeBuffer::from_text(text), EditConstraints::multi_line())
    }

    #[test]
    fn test_shift_down_anchors_at_cursor() {
        let mut s = state("Testing");
        s.set_cursor(Position::new(0, 3));
        let mut controller = SelectionController::new();

        assert!(controller.key_down(KeyName::ShiftLeft, &mut s));
        assert!(controller.is_selecting());
        assert_eq!(s.anchor(), Some(Position::new(0, 3)));

        assert!(controller.key_up(KeyName::ShiftLeft));
        assert!(!controller.is_selecting());
        assert_eq!(s.anchor(), Some(Position::new(0, 3)));
    }

    #[test]
    fn test_shift_down_keeps_existing_anchor() {
        let mut s = state("Testing");
        s.select_range(Position::new(0, 1), Position::new(0, 4));
        let mut controller = SelectionController::new();
        controller.key_down(KeyName::ShiftRight, &mut s);
        assert_eq!(s.anchor(), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_both_shifts_must_release() {
        let mut s = state("");
        let mut controller = SelectionController::new();
        controller.key_down(KeyName::ShiftLeft, &mut s);
        controller.key_down(KeyName::ShiftRight, &mut s);
        controller.key_up(KeyName::ShiftLeft);
        assert!(controller.is_selecting());
        controller.release_all();
        assert!(!controller.is_selecting());
    }

    #[test]
    fn test_message_for_key() {
        let mut controller = SelectionController::new();
        assert_eq!(
            controller.message_for_key(KeyName::Home),
            Some(TextEditMsg::Move(MoveTarget::LineStart))
        );
        assert_eq!(controller.message_for_key(KeyName::Tab), None);

        let mut s = state("");
        controller.key_down(KeyName::ShiftLeft, &mut s);
        assert_eq!(
            controller.message_for_key(KeyName::PageDown),
            Some(TextEditMsg::MoveWithSelection(MoveTarget::PageDown))
        );
        assert_eq!(
            controller.message_for_key(KeyName::Enter),
            Some(TextEditMsg::InsertNewline)
        );
    }

    #[test]
    fn test_selection_ranges_span_rows() {
        let mut s = state("Testing\nTesting\nTesting");
        s.select_range(Position::new(0, 5), Position::new(2, 2));
        assert_eq!(
            SelectionController::selection_ranges(&s),
            vec![
                RowRange { line: 0, start: 5, end: 7 },
                RowRange { line: 1, start: 0, end: 7 },
                RowRange { line: 2, start: 0, end: 2 },
            ]
        );
    }

    #[test]
    fn test_selection_ranges_reversed_single_row() {
        let mut s = state("Testing");
        s.select_range(Position::new(0, 5), Position::new(0, 2));
        assert_eq!(
            SelectionController::selection_ranges(&s),
            vec![RowRange { line: 0, start: 2, end: 5 }]
        );
    }

    #[test]
    fn test_no_selection_no_ranges() {
        let s = state("Testing");
        assert!(SelectionController::selection_ranges(&s).is_empty());
    }
}
