//! Message types for the text editing engine.

/// Target for cursor movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Move one character left
    Left,
    /// Move one character right
    Right,
    /// Move one line up
    Up,
    /// Move one line down
    Down,
    /// Move to start of line
    LineStart,
    /// Move to end of line
    LineEnd,
    /// Move one page up
    PageUp,
    /// Move one page down
    PageDown,
}

/// Every operation the engine can apply to an [`EditableState`](super::EditableState).
#[derive(Debug, Clone, PartialEq)]
pub enum TextEditMsg {
    // === Movement ===
    /// Move cursor, dropping any selection
    Move(MoveTarget),
    /// Move cursor and extend selection
    MoveWithSelection(MoveTarget),

    // === Insertion ===
    InsertChar(char),
    InsertText(String),
    /// Split the row (ignored by single-line entries)
    InsertNewline,

    // === Deletion ===
    /// Backspace
    DeleteBackward,
    /// Delete
    DeleteForward,

    // === Selection ===
    SelectAll,
    SelectWord,

    // === Clipboard ===
    Copy,
    Cut,
    Paste,

    // === Undo/Redo ===
    Undo,
    Redo,
}

impl TextEditMsg {
    /// Check if this message may modify the buffer
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            TextEditMsg::InsertChar(_)
                | TextEditMsg::InsertText(_)
                | TextEditMsg::InsertNewline
                | TextEditMsg::DeleteBackward
                | TextEditMsg::DeleteForward
                | TextEditMsg::Cut
                | TextEditMsg::Paste
                | TextEditMsg::Undo
                | TextEditMsg::Redo
        )
    }
}
