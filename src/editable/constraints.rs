//! Edit constraints for an entry.
//!
//! Constraints decide how input is shaped before it reaches the buffer and
//! which operations are available (newlines, clipboard export, undo).

use std::borrow::Cow;

use crate::util::text::flatten_newlines;

use super::layout::Wrapping;

/// Restrictions for one editing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditConstraints {
    /// Newlines split rows. When false the buffer always holds exactly one row.
    pub multi_line: bool,

    /// Obscured input. Copy and Cut are refused.
    pub password: bool,

    /// Requested wrap mode; see [`EditConstraints::effective_wrapping`]
    pub wrapping: Wrapping,

    /// Enable undo/redo tracking
    pub enable_undo: bool,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self::single_line()
    }
}

impl EditConstraints {
    pub fn single_line() -> Self {
        Self {
            multi_line: false,
            password: false,
            wrapping: Wrapping::Off,
            enable_undo: true,
        }
    }

    pub fn multi_line() -> Self {
        Self {
            multi_line: true,
            password: false,
            wrapping: Wrapping::Word,
            enable_undo: true,
        }
    }

    /// Single-line and obscured
    pub fn password() -> Self {
        Self {
            password: true,
            ..Self::single_line()
        }
    }

    pub fn with_wrapping(mut self, wrapping: Wrapping) -> Self {
        self.wrapping = wrapping;
        self
    }

    /// Single-line input never wraps; multi-line treats `Truncate` as `Off`.
    pub fn effective_wrapping(&self) -> Wrapping {
        match (self.multi_line, self.wrapping) {
            (false, _) => Wrapping::Off,
            (true, Wrapping::Truncate) => Wrapping::Off,
            (true, w) => w,
        }
    }

    /// Whether the selection may leave the entry through the clipboard
    pub fn allows_clipboard_export(&self) -> bool {
        !self.password
    }

    /// Shape incoming text: single-line contexts turn each `\n` into a
    /// space. Everything else, `\r` and tabs included, is kept as typed.
    pub fn sanitize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.multi_line {
            return Cow::Borrowed(text);
        }
        flatten_newlines(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_flattens_newlines() {
        let c = EditConstraints::single_line();
        assert_eq!(c.sanitize("clipboard\ncontent"), "clipboard content");
        assert_eq!(c.sanitize("a\r\nb"), "a\r b");
        assert_eq!(c.sanitize("a\rb"), "a\rb");
        assert_eq!(c.sanitize("tab\tkept"), "tab\tkept");
    }

    #[test]
    fn test_multi_line_keeps_newlines() {
        let c = EditConstraints::multi_line();
        assert_eq!(c.sanitize("a\r\nb\rc"), "a\r\nb\rc");
        assert!(matches!(c.sanitize("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_effective_wrapping() {
        assert_eq!(
            EditConstraints::single_line()
                .with_wrapping(Wrapping::Word)
                .effective_wrapping(),
            Wrapping::Off
        );
        assert_eq!(
            EditConstraints::multi_line()
                .with_wrapping(Wrapping::Truncate)
                .effective_wrapping(),
            Wrapping::Off
        );
        assert_eq!(
            EditConstraints::multi_line()
                .with_wrapping(Wrapping::Break)
                .effective_wrapping(),
            Wrapping::Break
        );
    }

    #[test]
    fn test_password_refuses_export() {
        assert!(!EditConstraints::password().allows_clipboard_export());
        assert!(!EditConstraints::password().multi_line);
        assert!(EditConstraints::single_line().allows_clipboard_export());
    }
}
