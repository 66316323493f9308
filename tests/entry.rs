//! Entry widget tests - state flags, display, callbacks, rendering queries

mod common;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{cursor_of, multi_line, setup_selection, single_line, type_text};
use entry_kit::binding::listener;
use entry_kit::editable::{EditConstraints, KeyName, Rect, Shortcut, Wrapping};
use entry_kit::{Entry, EntryConfig, MemoryClipboard};

// ========================================================================
// Disabled
// ========================================================================

#[test]
fn test_disabled_ignores_typing() {
    let mut entry = single_line("Testing");
    entry.disable();
    assert!(entry.is_disabled());
    assert!(!entry.is_editable());

    type_text(&mut entry, "abc");
    entry.typed_key(KeyName::Delete);
    assert_eq!(entry.text(), "Testing");
}

#[test]
fn test_disabled_ignores_movement() {
    let mut entry = single_line("Testing");
    entry.disable();
    entry.typed_key(KeyName::End);
    assert_eq!(cursor_of(&entry), (0, 0));
}

#[test]
fn test_disabled_refuses_cut_paste_undo() {
    let mut entry = single_line("Testing");
    type_text(&mut entry, "x");
    entry.disable();
    let mut clipboard = MemoryClipboard::with_content("paste");

    assert!(!entry.typed_shortcut(Shortcut::Paste, &mut clipboard));
    assert!(!entry.typed_shortcut(Shortcut::Undo, &mut clipboard));
    assert!(entry.typed_shortcut(Shortcut::SelectAll, &mut clipboard));
    assert!(!entry.typed_shortcut(Shortcut::Cut, &mut clipboard));
    assert_eq!(entry.text(), "xTesting");
}

#[test]
fn test_enable_restores_editing() {
    let mut entry = single_line("");
    entry.disable();
    entry.typed_rune('a');
    entry.enable();
    entry.typed_rune('b');
    assert_eq!(entry.text(), "b");
}

// ========================================================================
// Display text
// ========================================================================

#[test]
fn test_placeholder_shown_when_empty() {
    let mut entry = Entry::new();
    entry.set_placeholder("Type here");
    assert_eq!(entry.display_text(), "Type here");
    entry.typed_rune('a');
    assert_eq!(entry.display_text(), "a");
    assert_eq!(entry.placeholder(), "Type here");
}

#[test]
fn test_password_masks_each_char() {
    let mut entry = Entry::new_password();
    entry.set_text("Hié™");
    assert!(entry.is_password());
    assert_eq!(entry.display_text(), "••••");

    entry.set_password_revealed(true);
    assert!(entry.is_password_revealed());
    assert_eq!(entry.display_text(), "Hié™");
}

#[test]
fn test_password_mask_from_config() {
    let config = EntryConfig {
        password_mask: '*',
        ..EntryConfig::default()
    };
    let mut entry = Entry::with_config(EditConstraints::password(), &config);
    entry.set_text("abc");
    assert_eq!(entry.display_text(), "***");
    assert_eq!(entry.layout().lines()[0].text, "***");
}

#[test]
fn test_password_is_single_line() {
    let mut entry = Entry::new_password();
    entry.set_text("a\nb");
    assert!(!entry.is_multi_line());
    assert_eq!(entry.text(), "a b");
}

// ========================================================================
// Wrapping
// ========================================================================

#[test]
fn test_single_line_never_wraps() {
    let mut entry = single_line("a long single line");
    entry.set_wrapping(Wrapping::Word);
    entry.set_width(16.0);
    assert_eq!(entry.wrapping(), Wrapping::Off);
    assert_eq!(entry.layout().len(), 1);
}

#[test]
fn test_multi_line_truncate_acts_as_off() {
    let mut entry = multi_line("abc");
    entry.set_wrapping(Wrapping::Truncate);
    assert_eq!(entry.wrapping(), Wrapping::Off);
}

#[test]
fn test_multi_line_word_wrap_layout() {
    let mut entry = multi_line("hello big world\nx");
    assert_eq!(entry.wrapping(), Wrapping::Word);
    entry.set_width(80.0);

    let layout = entry.layout();
    let texts: Vec<&str> = layout.lines().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["hello big ", "world", "x"]);
    assert_eq!(layout.lines()[1].line, 0);
    assert_eq!(layout.lines()[2].line, 1);
}

// ========================================================================
// Focus and rendering queries
// ========================================================================

#[test]
fn test_unfocused_hides_highlight_but_keeps_selection() {
    let mut entry = setup_selection(false);
    assert_eq!(
        entry.highlight_rects(),
        vec![Rect {
            x: 16.0,
            y: 16.0,
            width: 24.0,
            height: 16.0,
        }]
    );

    entry.focus_lost();
    assert!(!entry.is_focused());
    assert!(entry.highlight_rects().is_empty());
    assert_eq!(entry.selected_text(), "sti");
}

#[test]
fn test_multi_row_highlight() {
    let mut entry = setup_selection(false);
    entry.typed_key(KeyName::Down);
    let rects = entry.highlight_rects();
    assert_eq!(rects.len(), 2);
    assert_eq!((rects[0].x, rects[0].y, rects[0].width), (16.0, 16.0, 40.0));
    assert_eq!((rects[1].x, rects[1].y, rects[1].width), (0.0, 32.0, 40.0));
}

#[test]
fn test_focus_lost_releases_shift() {
    let mut entry = setup_selection(false);
    entry.focus_lost();
    entry.focus_gained();
    entry.typed_key(KeyName::Right);
    assert_eq!(cursor_of(&entry), (1, 5));
    assert_eq!(entry.selected_text(), "");
}

#[test]
fn test_caret_position() {
    let mut entry = setup_selection(false);
    assert_eq!(entry.caret_position(), Some((40.0, 16.0)));

    entry.disable();
    assert_eq!(entry.caret_position(), None);
    entry.enable();
    entry.focus_lost();
    assert_eq!(entry.caret_position(), None);
}

// ========================================================================
// Callbacks
// ========================================================================

#[test]
fn test_on_changed_fires_for_edits() {
    let mut entry = Entry::new_multi_line();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    entry.on_changed(move |text| log.borrow_mut().push(text.to_string()));

    entry.set_text("Test");
    entry.typed_key(KeyName::End);
    entry.typed_rune('s');
    entry.typed_key(KeyName::Return);
    entry.typed_key(KeyName::Backspace);

    assert_eq!(*seen.borrow(), vec!["Test", "Tests", "Tests\n", "Tests"]);
}

#[test]
fn test_on_changed_silent_for_movement_and_copy() {
    let mut entry = single_line("abc");
    let count = Rc::new(RefCell::new(0));
    let c = Rc::clone(&count);
    entry.on_changed(move |_| *c.borrow_mut() += 1);

    let mut clipboard = MemoryClipboard::new();
    entry.typed_key(KeyName::Right);
    entry.typed_shortcut(Shortcut::SelectAll, &mut clipboard);
    entry.typed_shortcut(Shortcut::Copy, &mut clipboard);
    entry.typed_key(KeyName::Backspace);
    entry.typed_key(KeyName::Backspace);

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_refresh_notifier_fires_on_visible_changes() {
    let mut entry = single_line("abc");
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    entry
        .refresh_notifier()
        .add_listener(listener(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));

    entry.typed_key(KeyName::Right);
    entry.typed_rune('x');
    entry.focus_lost();
    assert_eq!(count.load(Ordering::SeqCst), 3);

    // Nothing to delete at the end
    entry.set_cursor(entry.state().document_end());
    let before = count.load(Ordering::SeqCst);
    entry.typed_key(KeyName::Delete);
    assert_eq!(count.load(Ordering::SeqCst), before);
}

#[test]
fn test_visible_rows_from_config() {
    let config = EntryConfig {
        visible_rows: 7,
        ..EntryConfig::default()
    };
    let entry = Entry::with_config(EditConstraints::multi_line(), &config);
    assert_eq!(entry.visible_rows(), 7);
    assert!(entry.is_multi_line());
}

#[test]
fn test_viewport_setters_request_refresh() {
    let mut entry = multi_line("a\nb\nc");
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    entry.refresh_notifier().add_listener(listener(move || {
        c.fetch_add(1, Ordering::SeqCst);
    }));

    entry.set_visible_rows(5);
    assert_eq!(count.load(Ordering::SeqCst), 1);
    entry.set_width(100.0);
    assert_eq!(count.load(Ordering::SeqCst), 2);
    assert_eq!(entry.visible_rows(), 5);
}
