//! Config persistence tests

use std::fs;

use entry_kit::editable::{EditConstraints, KeyName};
use entry_kit::{Entry, EntryConfig};
use tempfile::TempDir;

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = EntryConfig {
        password_mask: '*',
        undo_limit: 10,
        tab_width: 8,
        visible_rows: 5,
    };

    config.save_to(&path).unwrap();
    assert!(path.exists());
    assert_eq!(EntryConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = EntryConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, EntryConfig::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "visible_rows: 12\n").unwrap();

    let config = EntryConfig::load_from(&path);
    assert_eq!(config.visible_rows, 12);
    assert_eq!(config.password_mask, '•');
    assert_eq!(config.undo_limit, 1000);
    assert_eq!(config.tab_width, 4);
}

#[test]
fn test_invalid_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "visible_rows: [not, a, number]\n").unwrap();
    assert_eq!(EntryConfig::load_from(&path), EntryConfig::default());
}

#[test]
fn test_page_rows_follow_loaded_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "visible_rows: 2\n").unwrap();
    let config = EntryConfig::load_from(&path);

    let mut entry = Entry::with_config(EditConstraints::multi_line(), &config);
    entry.set_text("a\nb\nc\nd");
    entry.set_cursor(Default::default());
    entry.typed_key(KeyName::PageDown);
    assert_eq!(entry.cursor_row(), 2);
}
