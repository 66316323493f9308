//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use entry_kit::editable::{KeyName, Position};
use entry_kit::Entry;

/// Three identical rows used by the selection tests
pub const THREE_ROWS: &str = "Testing\nTesting\nTesting";

/// Multi-line entry holding `text`, focused, cursor at (0, 0)
pub fn multi_line(text: &str) -> Entry {
    let mut entry = Entry::new_multi_line();
    entry.set_text(text);
    entry.set_cursor(Position::zero());
    entry.focus_gained();
    entry
}

/// Single-line entry holding `text`, focused, cursor at column 0
pub fn single_line(text: &str) -> Entry {
    let mut entry = Entry::new();
    entry.set_text(text);
    entry.set_cursor(Position::zero());
    entry.focus_gained();
    entry
}

/// Type every key in order, without touching Shift
pub fn type_keys(entry: &mut Entry, keys: &[KeyName]) {
    for key in keys {
        entry.typed_key(*key);
    }
}

pub fn type_text(entry: &mut Entry, text: &str) {
    for ch in text.chars() {
        entry.typed_rune(ch);
    }
}

/// Select "sti" on the middle row of [`THREE_ROWS`] with Shift still held.
///
/// Forward: anchor (1,2), cursor (1,5). Reverse: anchor (1,5), cursor (1,2).
pub fn setup_selection(reverse: bool) -> Entry {
    let mut entry = multi_line(THREE_ROWS);
    if reverse {
        entry.set_cursor(Position::new(1, 5));
        entry.key_down(KeyName::ShiftLeft);
        type_keys(&mut entry, &[KeyName::Left, KeyName::Left, KeyName::Left]);
    } else {
        entry.set_cursor(Position::new(1, 2));
        entry.key_down(KeyName::ShiftLeft);
        type_keys(&mut entry, &[KeyName::Right, KeyName::Right, KeyName::Right]);
    }
    assert_eq!(entry.selected_text(), "sti");
    entry
}

/// (row, column) of the cursor
pub fn cursor_of(entry: &Entry) -> (usize, usize) {
    (entry.cursor_row(), entry.cursor_column())
}
