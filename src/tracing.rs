//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=entry_kit::entry=trace` - cursor diffs after every key
//! - `RUST_LOG=entry_kit::binding=trace` - listener triggers
//!
//! # Log Files
//!
//! Logs are written to `~/.config/entry-kit/logs/entry-kit.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::{EditableState, TextBuffer};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// the config logs dir with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of cursor/selection state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub line: usize,
    pub column: usize,
    pub anchor: Option<(usize, usize)>,
    pub selection_empty: bool,
    pub len_chars: usize,
}

impl CursorSnapshot {
    pub fn from_state<B: TextBuffer>(state: &EditableState<B>) -> Self {
        let cursor = state.cursor();
        Self {
            line: cursor.line,
            column: cursor.column,
            anchor: state.anchor().map(|a| (a.line, a.column)),
            selection_empty: !state.has_selection(),
            len_chars: state.buffer().len_chars(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &CursorSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.line != other.line || self.column != other.column {
            changes.push(format!(
                "cursor ({},{}) → ({},{})",
                self.line, self.column, other.line, other.column
            ));
        }
        if self.anchor != other.anchor {
            changes.push(match other.anchor {
                Some((line, column)) => format!("anchor ({},{})", line, column),
                None => "anchor cleared".to_string(),
            });
        }
        if self.selection_empty != other.selection_empty {
            let status = if other.selection_empty {
                "cleared"
            } else {
                "active"
            };
            changes.push(format!("selection {}", status));
        }
        if self.len_chars != other.len_chars {
            changes.push(format!("len {} → {}", self.len_chars, other.len_chars));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
