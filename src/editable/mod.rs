//! Text editing engine behind the Entry widget.
//!
//! # Architecture
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: buffer traits, implemented by [`RopeBuffer`]
//! - [`EditableState`]: text, cursor, selection anchor, and undo history
//! - [`EditConstraints`]: single-line / multi-line / password rules
//! - [`SelectionController`]: Shift tracking and key-to-[`TextEditMsg`] mapping
//! - [`apply_text_edit_msg`]: applies a message, with an explicit [`EditContext`]
//! - [`TextLayout`] / [`wrap_row`]: wrapping and hit testing through a [`TextMeasure`]
//!
//! # Example
//!
//! ```
//! use entry_kit::editable::{EditableState, EditConstraints, Position, RopeBuffer};
//!
//! let mut state = EditableState::new(
//!     RopeBuffer::from_text("Testing"),
//!     EditConstraints::single_line(),
//! );
//! state.select_range(Position::new(0, 2), Position::new(0, 5));
//! state.insert_text("Insert");
//!
//! assert_eq!(state.text(), "TeInsertng");
//! ```

mod buffer;
mod constraints;
mod context;
mod controller;
mod cursor;
mod dispatch;
mod history;
mod keys;
mod layout;
mod measure;
mod messages;
mod selection;
mod state;

// Re-export main types
pub use buffer::{RopeBuffer, TextBuffer, TextBufferMut};
pub use constraints::EditConstraints;
pub use context::EditContext;
pub use controller::SelectionController;
pub use cursor::Position;
pub use dispatch::apply_text_edit_msg;
pub use history::{EditHistory, EditOperation, DEFAULT_UNDO_LIMIT};
pub use keys::{KeyName, KeyParseError, Shortcut};
pub use layout::{wrap_row, Rect, TextLayout, VisualLine, Wrapping};
pub use measure::{MonospaceMeasure, TextMeasure};
pub use messages::{MoveTarget, TextEditMsg};
pub use selection::{RowRange, Selection};
pub use state::EditableState;
