//! Clipboard access for copy, cut, and paste.

/// A plain-text clipboard
pub trait Clipboard {
    /// Current clipboard text, or empty when unavailable
    fn content(&mut self) -> String;

    fn set_content(&mut self, text: &str);
}

/// In-process clipboard. Used by tests and headless hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    text: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn content(&mut self) -> String {
        self.text.clone()
    }

    fn set_content(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// The operating system clipboard via `arboard`.
///
/// Failures (no display server, clipboard owned elsewhere) are logged and
/// treated as an empty clipboard.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!("System clipboard unavailable: {}", e);
                None
            }
        };
        Self { inner }
    }

    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }
}

impl Clipboard for SystemClipboard {
    fn content(&mut self) -> String {
        let Some(clipboard) = self.inner.as_mut() else {
            return String::new();
        };
        match clipboard.get_text() {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("Clipboard read failed: {}", e);
                String::new()
            }
        }
    }

    fn set_content(&mut self, text: &str) {
        let Some(clipboard) = self.inner.as_mut() else {
            return;
        };
        if let Err(e) = clipboard.set_text(text.to_string()) {
            tracing::warn!("Clipboard write failed: {}", e);
        }
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("available", &self.is_available())
            .finish()
    }
}
