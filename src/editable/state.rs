//! EditableState - text, one cursor, an optional selection anchor, and history.

use std::ops::Range;

use crate::util::char_type;

use super::buffer::{TextBuffer, TextBufferMut};
use super::constraints::EditConstraints;
use super::cursor::Position;
use super::history::{EditHistory, EditOperation};
use super::layout::Wrapping;
use super::selection::Selection;

/// Editable text with a cursor, a selection anchor, and undo history.
///
/// The selection is derived: it exists while an anchor is set and differs
/// from the cursor. Every operation is total; out-of-range requests clamp or
/// do nothing.
#[derive(Debug, Clone)]
pub struct EditableState<B: TextBuffer> {
    buffer: B,
    cursor: Position,
    anchor: Option<Position>,
    constraints: EditConstraints,
    history: EditHistory,
}

impl<B: TextBuffer> EditableState<B> {
    pub fn new(buffer: B, constraints: EditConstraints) -> Self {
        Self {
            buffer,
            cursor: Position::zero(),
            anchor: None,
            constraints,
            history: EditHistory::new(),
        }
    }

    /// Cap the undo stack at `limit` operations
    pub fn with_undo_limit(mut self, limit: usize) -> Self {
        self.history.set_max_size(limit);
        self
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn constraints(&self) -> &EditConstraints {
        &self.constraints
    }

    pub fn set_wrapping(&mut self, wrapping: Wrapping) {
        self.constraints.wrapping = wrapping;
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn anchor(&self) -> Option<Position> {
        self.anchor
    }

    /// The active selection, if the anchor is set and differs from the cursor
    pub fn selection(&self) -> Option<Selection> {
        self.anchor
            .filter(|anchor| *anchor != self.cursor)
            .map(|anchor| Selection::new(anchor, self.cursor))
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    pub fn text(&self) -> String {
        self.buffer.content()
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        match self.selection_offsets() {
            Some(range) => self.buffer.slice(range),
            None => String::new(),
        }
    }

    fn selection_offsets(&self) -> Option<Range<usize>> {
        let sel = self.selection()?;
        let (start, end) = (sel.start(), sel.end());
        Some(
            self.buffer.position_to_offset(start.line, start.column)
                ..self.buffer.position_to_offset(end.line, end.column),
        )
    }

    fn cursor_offset(&self) -> usize {
        self.buffer
            .position_to_offset(self.cursor.line, self.cursor.column)
    }

    fn position_at_offset(&self, offset: usize) -> Position {
        self.buffer.offset_to_position(offset).into()
    }

    /// Last position in the document
    pub fn document_end(&self) -> Position {
        let last_line = self.buffer.line_count().saturating_sub(1);
        Position::new(last_line, self.buffer.line_length(last_line))
    }

    /// Nearest valid position to `pos`
    pub fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.buffer.line_count().saturating_sub(1));
        Position::new(line, pos.column.min(self.buffer.line_length(line)))
    }

    /// Place the cursor, clamped into the text. The anchor is left alone.
    pub fn set_cursor(&mut self, pos: Position) -> Position {
        self.cursor = self.clamp(pos);
        self.cursor
    }

    /// Start a selection at the cursor unless one is already anchored
    pub fn begin_selection(&mut self) {
        if self.anchor.is_none() {
            self.anchor = Some(self.cursor);
        }
    }

    pub fn clear_anchor(&mut self) {
        self.anchor = None;
    }

    /// Select from `anchor` to `head`, both clamped
    pub fn select_range(&mut self, anchor: Position, head: Position) {
        self.anchor = Some(self.clamp(anchor));
        self.cursor = self.clamp(head);
    }

    /// Move the cursor to `pos`, keeping (or starting) the selection
    pub fn extend_selection_to(&mut self, pos: Position) {
        self.begin_selection();
        self.cursor = self.clamp(pos);
    }

    pub fn can_undo(&self) -> bool {
        self.constraints.enable_undo && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.constraints.enable_undo && self.history.can_redo()
    }

    /// Text that Copy would place on the clipboard
    pub fn copy_text(&self) -> Option<String> {
        if !self.constraints.allows_clipboard_export() || !self.has_selection() {
            return None;
        }
        Some(self.selected_text())
    }
}

// =============================================================================
// Movement Operations
// =============================================================================

impl<B: TextBuffer> EditableState<B> {
    /// Extending moves anchor at the cursor if needed; plain moves drop the anchor.
    fn begin_move(&mut self, extend_selection: bool) {
        if extend_selection {
            self.begin_selection();
        } else {
            self.anchor = None;
        }
    }

    /// Move cursor left by one character. Without extend, an active
    /// selection collapses to its start instead.
    pub fn move_left(&mut self, extend_selection: bool) {
        if !extend_selection {
            if let Some(sel) = self.selection() {
                self.cursor = sel.start();
                self.anchor = None;
                return;
            }
        }
        self.begin_move(extend_selection);

        if self.cursor.column > 0 {
            self.cursor.column -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.column = self.buffer.line_length(self.cursor.line);
        }
    }

    /// Move cursor right by one character. Without extend, an active
    /// selection collapses to its end instead.
    pub fn move_right(&mut self, extend_selection: bool) {
        if !extend_selection {
            if let Some(sel) = self.selection() {
                self.cursor = sel.end();
                self.anchor = None;
                return;
            }
        }
        self.begin_move(extend_selection);

        let line_len = self.buffer.line_length(self.cursor.line);
        if self.cursor.column < line_len {
            self.cursor.column += 1;
        } else if self.cursor.line + 1 < self.buffer.line_count() {
            self.cursor.line += 1;
            self.cursor.column = 0;
        }
    }

    /// Move cursor up by one line, clamping the column
    pub fn move_up(&mut self, extend_selection: bool) {
        self.begin_move(extend_selection);
        if !self.constraints.multi_line || self.cursor.line == 0 {
            return;
        }

        self.cursor.line -= 1;
        let line_len = self.buffer.line_length(self.cursor.line);
        self.cursor.column = self.cursor.column.min(line_len);
    }

    /// Move cursor down by one line, clamping the column
    pub fn move_down(&mut self, extend_selection: bool) {
        self.begin_move(extend_selection);
        if !self.constraints.multi_line || self.cursor.line + 1 >= self.buffer.line_count() {
            return;
        }

        self.cursor.line += 1;
        let line_len = self.buffer.line_length(self.cursor.line);
        self.cursor.column = self.cursor.column.min(line_len);
    }

    pub fn move_line_start(&mut self, extend_selection: bool) {
        self.begin_move(extend_selection);
        self.cursor.column = 0;
    }

    pub fn move_line_end(&mut self, extend_selection: bool) {
        self.begin_move(extend_selection);
        self.cursor.column = self.buffer.line_length(self.cursor.line);
    }

    /// Move up by `rows` lines, snapping to the document start when that
    /// would pass the first row
    pub fn page_up(&mut self, rows: usize, extend_selection: bool) {
        self.begin_move(extend_selection);
        let rows = rows.max(1);
        if rows > self.cursor.line {
            self.cursor = Position::zero();
            return;
        }

        self.cursor.line -= rows;
        let line_len = self.buffer.line_length(self.cursor.line);
        self.cursor.column = self.cursor.column.min(line_len);
    }

    /// Move down by `rows` lines, snapping to the document end when that
    /// would pass the last row
    pub fn page_down(&mut self, rows: usize, extend_selection: bool) {
        self.begin_move(extend_selection);
        let target = self.cursor.line + rows.max(1);
        if target >= self.buffer.line_count() {
            self.cursor = self.document_end();
            return;
        }

        self.cursor.line = target;
        let line_len = self.buffer.line_length(target);
        self.cursor.column = self.cursor.column.min(line_len);
    }

    /// Select all text
    pub fn select_all(&mut self) {
        self.anchor = Some(Position::zero());
        self.cursor = self.document_end();
    }

    /// Select the run of same-class characters under the cursor
    pub fn select_word(&mut self) {
        let line = self.cursor.line;
        let line_content = self.buffer.line(line).unwrap_or_default();
        let chars: Vec<char> = line_content.chars().collect();

        if chars.is_empty() {
            return;
        }

        // A cursor past the last char selects the word it just left
        let col = self.cursor.column.min(chars.len() - 1);
        let target_type = char_type(chars[col]);

        let mut start = col;
        let mut end = col;
        while start > 0 && char_type(chars[start - 1]) == target_type {
            start -= 1;
        }
        while end < chars.len() && char_type(chars[end]) == target_type {
            end += 1;
        }

        self.anchor = Some(Position::new(line, start));
        self.cursor = Position::new(line, end);
    }
}

// =============================================================================
// Editing Operations (require TextBufferMut)
// =============================================================================

impl<B: TextBuffer + TextBufferMut> EditableState<B> {
    fn record(&mut self, op: EditOperation) {
        if self.constraints.enable_undo {
            self.history.push(op);
        }
    }

    /// Insert text at the cursor, replacing any selection.
    ///
    /// Single-line states turn newlines into spaces. Returns false when
    /// nothing changed.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let text = self.constraints.sanitize(text);
        let selection = self.selection_offsets();
        self.anchor = None;
        if text.is_empty() && selection.is_none() {
            return false;
        }

        let cursor_before = self.cursor;
        let (offset, deleted_text) = match selection {
            Some(range) => {
                let deleted = self.buffer.slice(range.clone());
                self.buffer.remove(range.clone());
                (range.start, deleted)
            }
            None => (self.cursor_offset(), String::new()),
        };

        self.buffer.insert(offset, &text);
        self.cursor = self.position_at_offset(offset + text.chars().count());

        let cursor_after = self.cursor;
        self.record(EditOperation::replace(
            offset,
            deleted_text,
            text.into_owned(),
            cursor_before,
            cursor_after,
        ));
        true
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut buf))
    }

    /// Split the row at the cursor. Ignored by single-line states.
    pub fn insert_newline(&mut self) -> bool {
        if !self.constraints.multi_line {
            return false;
        }
        self.insert_text("\n")
    }

    /// Paste clipboard text at the cursor, replacing any selection
    pub fn paste(&mut self, text: &str) -> bool {
        self.insert_text(text)
    }

    /// Delete the selected text. Returns false when nothing was selected.
    pub fn delete_selection(&mut self) -> bool {
        let Some(range) = self.selection_offsets() else {
            self.anchor = None;
            return false;
        };

        let cursor_before = self.cursor;
        let deleted = self.buffer.slice(range.clone());
        self.buffer.remove(range.clone());
        self.anchor = None;
        self.cursor = self.position_at_offset(range.start);

        let cursor_after = self.cursor;
        self.record(EditOperation::delete(
            range.start,
            deleted,
            cursor_before,
            cursor_after,
        ));
        true
    }

    /// Delete character before cursor (Backspace). At the start of a row
    /// this merges the row into the previous one.
    pub fn delete_backward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        self.anchor = None;

        let offset = self.cursor_offset();
        if offset == 0 {
            return false;
        }

        let cursor_before = self.cursor;
        let deleted = self.buffer.slice(offset - 1..offset);
        self.buffer.remove(offset - 1..offset);
        self.cursor = self.position_at_offset(offset - 1);

        let cursor_after = self.cursor;
        self.record(EditOperation::delete(
            offset - 1,
            deleted,
            cursor_before,
            cursor_after,
        ));
        true
    }

    /// Delete character after cursor (Delete). At the end of a row this
    /// pulls the next row up. The cursor does not move.
    pub fn delete_forward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        self.anchor = None;

        let offset = self.cursor_offset();
        if offset >= self.buffer.len_chars() {
            return false;
        }

        let deleted = self.buffer.slice(offset..offset + 1);
        self.buffer.remove(offset..offset + 1);

        let cursor = self.cursor;
        self.record(EditOperation::delete(offset, deleted, cursor, cursor));
        true
    }

    /// Remove the selection and return it for the clipboard.
    /// Refused in password mode.
    pub fn cut(&mut self) -> Option<String> {
        let text = self.copy_text()?;
        self.delete_selection();
        Some(text)
    }

    /// Apply the reverse of `op` and restore the cursor it started from
    fn revert(&mut self, op: &EditOperation) {
        if !op.inserted_text.is_empty() {
            let end = op.offset + op.inserted_text.chars().count();
            self.buffer.remove(op.offset..end);
        }
        if !op.deleted_text.is_empty() {
            self.buffer.insert(op.offset, &op.deleted_text);
        }
        self.cursor = self.clamp(op.cursor_before);
        self.anchor = None;
    }

    /// Undo the last operation
    pub fn undo(&mut self) -> bool {
        if !self.constraints.enable_undo {
            return false;
        }
        let Some(op) = self.history.pop_undo() else {
            return false;
        };
        self.revert(&op);
        true
    }

    /// Redo the last undone operation
    pub fn redo(&mut self) -> bool {
        if !self.constraints.enable_undo {
            return false;
        }
        let Some(op) = self.history.pop_redo() else {
            return false;
        };
        self.revert(&op);
        true
    }

    /// Replace all content. The cursor is clamped into the new text rather
    /// than reset, the anchor is dropped, and history is cleared.
    pub fn set_text(&mut self, text: &str) {
        let text = self.constraints.sanitize(text);
        self.buffer.set_content(&text);
        self.cursor = self.clamp(self.cursor);
        self.anchor = None;
        self.history.clear();
    }
}
