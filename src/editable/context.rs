//! Explicit context for operations that reach outside the entry.

use crate::clipboard::Clipboard;

/// What an edit may need from its surroundings: the clipboard, and the
/// number of rows a page move covers.
///
/// Passed into [`apply_text_edit_msg`](super::apply_text_edit_msg) instead of
/// being looked up globally. Without a clipboard, Copy/Cut/Paste do nothing.
pub struct EditContext<'a> {
    pub clipboard: Option<&'a mut dyn Clipboard>,
    pub page_rows: usize,
}

impl<'a> EditContext<'a> {
    pub fn new(page_rows: usize) -> Self {
        Self {
            clipboard: None,
            page_rows,
        }
    }

    pub fn with_clipboard(clipboard: &'a mut dyn Clipboard, page_rows: usize) -> Self {
        Self {
            clipboard: Some(clipboard),
            page_rows,
        }
    }
}

impl std::fmt::Debug for EditContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditContext")
            .field("clipboard", &self.clipboard.is_some())
            .field("page_rows", &self.page_rows)
            .finish()
    }
}
