//! Named keys and shortcuts delivered to an entry.

use std::fmt;
use std::str::FromStr;

/// Non-printable keys an entry reacts to. Printable input arrives as runes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyName {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Delete,
    Return,
    Enter,
    Tab,
    Escape,
    ShiftLeft,
    ShiftRight,
}

impl KeyName {
    pub fn is_shift(self) -> bool {
        matches!(self, KeyName::ShiftLeft | KeyName::ShiftRight)
    }
}

/// Clipboard and editing shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    Copy,
    Cut,
    Paste,
    SelectAll,
    Undo,
    Redo,
}

/// Error parsing a key or shortcut name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    InvalidKey(String),
    InvalidShortcut(String),
}

impl fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyParseError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeyParseError::InvalidShortcut(s) => write!(f, "Invalid shortcut: {}", s),
        }
    }
}

impl std::error::Error for KeyParseError {}

impl FromStr for KeyName {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" | "arrowleft" => Ok(KeyName::Left),
            "right" | "arrowright" => Ok(KeyName::Right),
            "up" | "arrowup" => Ok(KeyName::Up),
            "down" | "arrowdown" => Ok(KeyName::Down),
            "home" => Ok(KeyName::Home),
            "end" => Ok(KeyName::End),
            "pageup" | "pgup" => Ok(KeyName::PageUp),
            "pagedown" | "pgdn" => Ok(KeyName::PageDown),
            "backspace" | "back" => Ok(KeyName::Backspace),
            "delete" | "del" => Ok(KeyName::Delete),
            "return" => Ok(KeyName::Return),
            "enter" => Ok(KeyName::Enter),
            "tab" => Ok(KeyName::Tab),
            "escape" | "esc" => Ok(KeyName::Escape),
            "shift" | "shiftleft" | "leftshift" => Ok(KeyName::ShiftLeft),
            "shiftright" | "rightshift" => Ok(KeyName::ShiftRight),
            _ => Err(KeyParseError::InvalidKey(s.to_string())),
        }
    }
}

impl FromStr for Shortcut {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "copy" => Ok(Shortcut::Copy),
            "cut" => Ok(Shortcut::Cut),
            "paste" => Ok(Shortcut::Paste),
            "selectall" | "select-all" => Ok(Shortcut::SelectAll),
            "undo" => Ok(Shortcut::Undo),
            "redo" => Ok(Shortcut::Redo),
            _ => Err(KeyParseError::InvalidShortcut(s.to_string())),
        }
    }
}
