//! entry-kit - text entry editing engine and observable data bindings
//!
//! This crate provides the editing core of a GUI text entry widget,
//! independent of any renderer, plus thread-safe bindable values that an
//! entry (or anything else) can follow.

pub mod binding;
pub mod clipboard;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod entry;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use config::EntryConfig;
pub use entry::Entry;
