//! Text editing tests - insert, delete, newline, set_text, undo/redo

mod common;

use common::{cursor_of, multi_line, single_line, type_keys, type_text};
use entry_kit::editable::{
    EditConstraints, EditableState, KeyName, Position, RopeBuffer, Shortcut, TextBuffer,
};
use entry_kit::{Entry, MemoryClipboard};

// ========================================================================
// Typing
// ========================================================================

#[test]
fn test_type_into_empty_entry() {
    let mut entry = Entry::new();
    type_text(&mut entry, "hello");
    assert_eq!(entry.text(), "hello");
    assert_eq!(cursor_of(&entry), (0, 5));
}

#[test]
fn test_type_in_middle() {
    let mut entry = single_line("held");
    entry.set_cursor(Position::new(0, 3));
    type_text(&mut entry, "lo wor");
    assert_eq!(entry.text(), "hello word");
    assert_eq!(cursor_of(&entry), (0, 9));
}

#[test]
fn test_type_multibyte() {
    let mut entry = Entry::new();
    type_text(&mut entry, "Hié™שרה");
    assert_eq!(entry.text(), "Hié™שרה");
    assert_eq!(cursor_of(&entry), (0, 7));
}

#[test]
fn test_typed_newline_rune_becomes_space_in_single_line() {
    let mut entry = Entry::new();
    type_text(&mut entry, "a\nb");
    assert_eq!(entry.text(), "a b");
}

// ========================================================================
// Newlines
// ========================================================================

#[test]
fn test_return_splits_row() {
    let mut entry = multi_line("Testing");
    entry.set_cursor(Position::new(0, 4));
    entry.typed_key(KeyName::Return);
    assert_eq!(entry.text(), "Test\ning");
    assert_eq!(cursor_of(&entry), (1, 0));
}

#[test]
fn test_enter_ignored_in_single_line() {
    let mut entry = single_line("Testing");
    entry.typed_key(KeyName::Enter);
    assert_eq!(entry.text(), "Testing");
}

// ========================================================================
// Backspace / Delete
// ========================================================================

#[test]
fn test_backspace_at_start_does_nothing() {
    let mut entry = single_line("abc");
    entry.typed_key(KeyName::Backspace);
    assert_eq!(entry.text(), "abc");
    assert_eq!(cursor_of(&entry), (0, 0));
}

#[test]
fn test_backspace_merges_rows() {
    let mut entry = multi_line("H\n");
    entry.set_cursor(Position::new(1, 0));
    entry.typed_key(KeyName::Backspace);
    assert_eq!(entry.text(), "H");
    assert_eq!(cursor_of(&entry), (0, 1));
}

#[test]
fn test_delete_at_end_does_nothing() {
    let mut entry = single_line("abc");
    entry.typed_key(KeyName::End);
    entry.typed_key(KeyName::Delete);
    assert_eq!(entry.text(), "abc");
}

#[test]
fn test_delete_pulls_next_row_up() {
    let mut entry = multi_line("ab\ncd");
    entry.set_cursor(Position::new(0, 2));
    entry.typed_key(KeyName::Delete);
    assert_eq!(entry.text(), "abcd");
    assert_eq!(cursor_of(&entry), (0, 2));
}

#[test]
fn test_delete_multibyte() {
    let mut entry = single_line("测试x");
    entry.typed_key(KeyName::Delete);
    assert_eq!(entry.text(), "试x");
    entry.typed_key(KeyName::End);
    entry.typed_key(KeyName::Backspace);
    assert_eq!(entry.text(), "试");
}

// ========================================================================
// set_text
// ========================================================================

#[test]
fn test_set_text_clamps_cursor() {
    let mut entry = Entry::new();
    entry.set_text("test");
    entry.set_cursor(Position::new(0, 4));
    assert_eq!(cursor_of(&entry), (0, 4));

    entry.set_text("x");
    assert_eq!(cursor_of(&entry), (0, 1));
}

#[test]
fn test_set_text_clamps_row() {
    let mut entry = multi_line("a\nb\nc");
    entry.set_cursor(Position::new(2, 1));
    entry.set_text("only one row");
    assert_eq!(cursor_of(&entry), (0, 1));
}

#[test]
fn test_set_text_drops_selection() {
    let mut entry = single_line("Testing");
    let mut clipboard = MemoryClipboard::new();
    entry.typed_shortcut(Shortcut::SelectAll, &mut clipboard);
    entry.set_text("Other");
    assert!(!entry.has_selection());
}

#[test]
fn test_set_text_flattens_newlines_in_single_line() {
    let mut entry = Entry::new();
    entry.set_text("one\ntwo\nthree");
    assert_eq!(entry.text(), "one two three");
}

#[test]
fn test_set_text_single_line_keeps_carriage_return() {
    let mut entry = Entry::new();
    entry.set_text("a\rb");
    assert_eq!(entry.text(), "a\rb");
    assert_eq!(entry.state().buffer().line_count(), 1);
}

#[test]
fn test_set_text_multi_line_round_trips() {
    for text in ["a\r\nb\rc", "one\ntwo\n", "", "\t tab\n\u{2028}"] {
        let mut entry = Entry::new_multi_line();
        entry.set_text(text);
        assert_eq!(entry.text(), text);
    }

    // Only `\n` splits rows
    let mut entry = Entry::new_multi_line();
    entry.set_text("one\r\ntwo\rthree");
    assert_eq!(entry.state().buffer().line_count(), 2);
}

// ========================================================================
// Undo / Redo
// ========================================================================

#[test]
fn test_undo_redo_typing() {
    let mut entry = Entry::new();
    let mut clipboard = MemoryClipboard::new();
    type_text(&mut entry, "ab");

    assert!(entry.typed_shortcut(Shortcut::Undo, &mut clipboard));
    assert_eq!(entry.text(), "a");
    assert_eq!(cursor_of(&entry), (0, 1));

    assert!(entry.typed_shortcut(Shortcut::Redo, &mut clipboard));
    assert_eq!(entry.text(), "ab");
    assert_eq!(cursor_of(&entry), (0, 2));
}

#[test]
fn test_undo_restores_replaced_selection() {
    let mut entry = common::setup_selection(false);
    let mut clipboard = MemoryClipboard::new();
    type_text(&mut entry, "X");
    assert_eq!(entry.text(), "Testing\nTeXng\nTesting");

    entry.typed_shortcut(Shortcut::Undo, &mut clipboard);
    assert_eq!(entry.text(), common::THREE_ROWS);
    assert_eq!(cursor_of(&entry), (1, 5));
}

#[test]
fn test_undo_delete_restores_text() {
    let mut entry = multi_line("ab\ncd");
    let mut clipboard = MemoryClipboard::new();
    entry.set_cursor(Position::new(1, 0));
    type_keys(&mut entry, &[KeyName::Backspace, KeyName::Backspace]);
    assert_eq!(entry.text(), "acd");

    entry.typed_shortcut(Shortcut::Undo, &mut clipboard);
    entry.typed_shortcut(Shortcut::Undo, &mut clipboard);
    assert_eq!(entry.text(), "ab\ncd");
    assert_eq!(cursor_of(&entry), (1, 0));
}

#[test]
fn test_undo_with_empty_history() {
    let mut entry = single_line("abc");
    let mut clipboard = MemoryClipboard::new();
    assert!(!entry.typed_shortcut(Shortcut::Undo, &mut clipboard));
    assert!(!entry.typed_shortcut(Shortcut::Redo, &mut clipboard));
}

#[test]
fn test_new_edit_clears_redo() {
    let mut state = EditableState::new(RopeBuffer::new(), EditConstraints::single_line());
    state.insert_text("a");
    state.undo();
    assert!(state.can_redo());
    state.insert_text("b");
    assert!(!state.can_redo());
    assert_eq!(state.text(), "b");
}

#[test]
fn test_undo_limit_drops_oldest() {
    let mut state = EditableState::new(RopeBuffer::new(), EditConstraints::single_line())
        .with_undo_limit(2);
    for ch in ['a', 'b', 'c'] {
        state.insert_char(ch);
    }
    while state.undo() {}
    assert_eq!(state.text(), "a");
}
