//! Entry widget core: a text input without rendering.
//!
//! The entry owns an [`EditableState`] and routes keyboard, pointer, and
//! clipboard events into it through a [`SelectionController`]. Rendering
//! hosts read [`Entry::display_text`], [`Entry::layout`],
//! [`Entry::highlight_rects`] and [`Entry::caret_position`], and subscribe to
//! [`Entry::refresh_notifier`] to learn when to repaint.
//!
//! A bound [`Bindable<String>`] may be changed from any thread. Its listener
//! only queues a signal; the UI thread applies the value when it calls
//! [`Entry::process_binding_updates`].

use std::fmt;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use crate::binding::{listener, Bindable, ChangeNotifier, Listener};
use crate::clipboard::Clipboard;
use crate::config::EntryConfig;
use crate::editable::{
    apply_text_edit_msg, EditConstraints, EditContext, EditableState, KeyName, MonospaceMeasure,
    Position, Rect, RopeBuffer, SelectionController, Shortcut, TextBuffer, TextEditMsg,
    TextLayout, TextMeasure, Wrapping,
};
use crate::tracing::CursorSnapshot;

type ChangedCallback = Box<dyn FnMut(&str)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeSource {
    /// Typing, clipboard, or a `set_text` call
    Local,
    /// A value pulled from the bound data
    Binding,
}

struct EntryBinding {
    data: Arc<dyn Bindable<String>>,
    listener: Listener,
    updates: Receiver<()>,
}

/// A single- or multi-line text input.
pub struct Entry {
    state: EditableState<RopeBuffer>,
    selection: SelectionController,
    measure: Box<dyn TextMeasure>,
    password_mask: char,
    placeholder: String,
    disabled: bool,
    focused: bool,
    revealed: bool,
    dragging: bool,
    visible_rows: usize,
    width: f32,
    on_changed: Option<ChangedCallback>,
    refresh: ChangeNotifier,
    binding: Option<EntryBinding>,
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

impl Entry {
    /// Single-line entry with default config
    pub fn new() -> Self {
        Self::with_config(EditConstraints::single_line(), &EntryConfig::default())
    }

    pub fn new_multi_line() -> Self {
        Self::with_config(EditConstraints::multi_line(), &EntryConfig::default())
    }

    /// Single-line entry that obscures its text
    pub fn new_password() -> Self {
        Self::with_config(EditConstraints::password(), &EntryConfig::default())
    }

    pub fn with_config(constraints: EditConstraints, config: &EntryConfig) -> Self {
        let state = EditableState::new(RopeBuffer::new(), constraints)
            .with_undo_limit(config.undo_limit);
        let measure = MonospaceMeasure::default().with_tab_width(config.tab_width);
        Self {
            state,
            selection: SelectionController::new(),
            measure: Box::new(measure),
            password_mask: config.password_mask,
            placeholder: String::new(),
            disabled: false,
            focused: false,
            revealed: false,
            dragging: false,
            visible_rows: config.visible_rows,
            width: 0.0,
            on_changed: None,
            refresh: ChangeNotifier::new(),
            binding: None,
        }
    }

    /// Single-line entry bound to `data`
    pub fn with_data<D>(data: &D) -> Self
    where
        D: Bindable<String> + Clone + 'static,
    {
        let mut entry = Self::new();
        entry.bind(data);
        entry
    }

    // =========================================================================
    // Text and cursor
    // =========================================================================

    pub fn text(&self) -> String {
        self.state.text()
    }

    /// Replace the text. The cursor is clamped into the new content and any
    /// selection is dropped.
    pub fn set_text(&mut self, text: &str) {
        self.replace_text(text, ChangeSource::Local);
    }

    pub fn state(&self) -> &EditableState<RopeBuffer> {
        &self.state
    }

    pub fn cursor(&self) -> Position {
        self.state.cursor()
    }

    pub fn cursor_row(&self) -> usize {
        self.state.cursor().line
    }

    pub fn cursor_column(&self) -> usize {
        self.state.cursor().column
    }

    /// Move the cursor, clamped into the text
    pub fn set_cursor(&mut self, pos: Position) {
        self.state.set_cursor(pos);
        self.refresh.trigger();
    }

    /// Selected text, even while unfocused
    pub fn selected_text(&self) -> String {
        self.state.selected_text()
    }

    pub fn has_selection(&self) -> bool {
        self.state.has_selection()
    }

    // =========================================================================
    // Properties
    // =========================================================================

    pub fn is_multi_line(&self) -> bool {
        self.state.constraints().multi_line
    }

    pub fn is_password(&self) -> bool {
        self.state.constraints().password
    }

    /// Wrap mode actually used for layout
    pub fn wrapping(&self) -> Wrapping {
        self.state.constraints().effective_wrapping()
    }

    pub fn set_wrapping(&mut self, wrapping: Wrapping) {
        self.state.set_wrapping(wrapping);
        self.refresh.trigger();
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
        self.refresh.trigger();
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_editable(&self) -> bool {
        !self.disabled
    }

    pub fn disable(&mut self) {
        if !self.disabled {
            self.disabled = true;
            self.refresh.trigger();
        }
    }

    pub fn enable(&mut self) {
        if self.disabled {
            self.disabled = false;
            self.refresh.trigger();
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus_gained(&mut self) {
        self.focused = true;
        self.refresh.trigger();
    }

    /// Drop focus. Held modifiers are forgotten; the selection is kept but
    /// no longer highlighted.
    pub fn focus_lost(&mut self) {
        self.focused = false;
        self.dragging = false;
        self.selection.release_all();
        self.refresh.trigger();
    }

    pub fn is_password_revealed(&self) -> bool {
        self.revealed
    }

    /// Show or hide the plain text of a password entry
    pub fn set_password_revealed(&mut self, revealed: bool) {
        self.revealed = revealed;
        self.refresh.trigger();
    }

    fn is_obscured(&self) -> bool {
        self.is_password() && !self.revealed
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Viewport height in rows; also the distance of a page move
    pub fn set_visible_rows(&mut self, rows: usize) {
        self.visible_rows = rows;
        self.refresh.trigger();
    }

    fn page_rows(&self) -> usize {
        self.visible_rows.max(1)
    }

    /// Width available for text, used for wrapping
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
        self.refresh.trigger();
    }

    pub fn set_measure(&mut self, measure: Box<dyn TextMeasure>) {
        self.measure = measure;
        self.refresh.trigger();
    }

    /// Called with the new text after every change
    pub fn on_changed<F>(&mut self, callback: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.on_changed = Some(Box::new(callback));
    }

    /// Fires whenever the entry needs repainting
    pub fn refresh_notifier(&self) -> &ChangeNotifier {
        &self.refresh
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Physical key press. Only Shift is of interest here.
    pub fn key_down(&mut self, key: KeyName) {
        if self.selection.key_down(key, &mut self.state) {
            tracing::trace!(?key, anchor = ?self.state.anchor(), "shift down");
        }
    }

    /// Physical key release
    pub fn key_up(&mut self, key: KeyName) {
        self.selection.key_up(key);
    }

    /// A named key was typed
    pub fn typed_key(&mut self, key: KeyName) {
        if !self.is_editable() {
            return;
        }
        let Some(msg) = self.selection.message_for_key(key) else {
            return;
        };
        let mut ctx = EditContext::new(self.page_rows());
        self.apply(msg, &mut ctx);
    }

    /// A printable character was typed
    pub fn typed_rune(&mut self, ch: char) {
        if !self.is_editable() {
            return;
        }
        let mut ctx = EditContext::new(self.page_rows());
        self.apply(TextEditMsg::InsertChar(ch), &mut ctx);
    }

    /// A shortcut was typed. Disabled entries still Copy and SelectAll.
    pub fn typed_shortcut(&mut self, shortcut: Shortcut, clipboard: &mut dyn Clipboard) -> bool {
        let msg = match shortcut {
            Shortcut::Copy => TextEditMsg::Copy,
            Shortcut::Cut => TextEditMsg::Cut,
            Shortcut::Paste => TextEditMsg::Paste,
            Shortcut::SelectAll => TextEditMsg::SelectAll,
            Shortcut::Undo => TextEditMsg::Undo,
            Shortcut::Redo => TextEditMsg::Redo,
        };
        if !self.is_editable() && msg.is_editing() {
            return false;
        }
        let page_rows = self.page_rows();
        let mut ctx = EditContext::with_clipboard(clipboard, page_rows);
        self.apply(msg, &mut ctx)
    }

    fn apply(&mut self, msg: TextEditMsg, ctx: &mut EditContext<'_>) -> bool {
        let before = CursorSnapshot::from_state(&self.state);
        let changed = apply_text_edit_msg(&mut self.state, &msg, ctx);
        if let Some(diff) = before.diff(&CursorSnapshot::from_state(&self.state)) {
            tracing::trace!(?msg, "{}", diff);
        }

        if !changed {
            return false;
        }
        if msg.is_editing() {
            self.text_changed(ChangeSource::Local);
        } else {
            self.refresh.trigger();
        }
        true
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    /// Text position under an entry-local point
    pub fn position_at(&self, x: f32, y: f32) -> Position {
        self.layout().position_at(self.measure.as_ref(), x, y)
    }

    /// Move the cursor to the tapped point, extending the selection while
    /// Shift is held
    pub fn tapped(&mut self, x: f32, y: f32) {
        if self.disabled {
            return;
        }
        let pos = self.position_at(x, y);
        if self.selection.is_selecting() {
            self.state.extend_selection_to(pos);
        } else {
            self.state.clear_anchor();
            self.state.set_cursor(pos);
        }
        self.refresh.trigger();
    }

    /// Select the word under the point
    pub fn double_tapped(&mut self, x: f32, y: f32) {
        if self.disabled {
            return;
        }
        let pos = self.position_at(x, y);
        self.state.clear_anchor();
        self.state.set_cursor(pos);
        self.state.select_word();
        self.refresh.trigger();
    }

    /// Pointer drag from the press point `from` to the current point `to`
    pub fn dragged(&mut self, from: (f32, f32), to: (f32, f32)) {
        if self.disabled {
            return;
        }
        let head = self.position_at(to.0, to.1);
        if self.dragging {
            self.state.extend_selection_to(head);
        } else {
            let anchor = self.position_at(from.0, from.1);
            self.state.select_range(anchor, head);
            self.dragging = true;
        }
        self.refresh.trigger();
    }

    pub fn drag_end(&mut self) {
        self.dragging = false;
    }

    // =========================================================================
    // Rendering queries
    // =========================================================================

    /// Text to draw: the placeholder when empty, masked when obscured
    pub fn display_text(&self) -> String {
        let text = self.state.text();
        if text.is_empty() {
            return self.placeholder.clone();
        }
        if self.is_obscured() {
            return self.mask(&text);
        }
        text
    }

    fn mask(&self, text: &str) -> String {
        text.chars()
            .map(|c| if c == '\n' { c } else { self.password_mask })
            .collect()
    }

    /// Visual lines of the current text at the current width
    pub fn layout(&self) -> TextLayout {
        let buffer = self.state.buffer();
        let rows = (0..buffer.line_count()).map(|i| {
            let row = buffer.line(i).unwrap_or_default();
            if self.is_obscured() {
                self.mask(&row)
            } else {
                row.into_owned()
            }
        });
        TextLayout::new(rows, self.width, self.wrapping(), self.measure.as_ref())
    }

    /// Selection highlight rectangles; empty while unfocused
    pub fn highlight_rects(&self) -> Vec<Rect> {
        if !self.focused {
            return Vec::new();
        }
        SelectionController::highlight_rects(&self.state, &self.layout(), self.measure.as_ref())
    }

    /// Caret top-left, while focused and editable
    pub fn caret_position(&self) -> Option<(f32, f32)> {
        if !self.focused || self.disabled {
            return None;
        }
        Some(
            self.layout()
                .point_at(self.measure.as_ref(), self.state.cursor()),
        )
    }

    // =========================================================================
    // Data binding
    // =========================================================================

    /// Bind the text to `data`. The current value is applied on the next
    /// [`Entry::process_binding_updates`]; local edits are written back.
    pub fn bind<D>(&mut self, data: &D)
    where
        D: Bindable<String> + Clone + 'static,
    {
        self.unbind();

        let (tx, updates) = mpsc::channel();
        // Queue the initial pull
        let _ = tx.send(());
        let listener = listener(move || {
            let _ = tx.send(());
        });

        let data: Arc<dyn Bindable<String>> = Arc::new(data.clone());
        data.add_listener(Arc::clone(&listener));
        self.binding = Some(EntryBinding {
            data,
            listener,
            updates,
        });
        tracing::debug!("entry bound");
    }

    /// Stop following the bound data. The current text stays.
    pub fn unbind(&mut self) {
        if let Some(binding) = self.binding.take() {
            binding.data.remove_listener(&binding.listener);
            tracing::debug!("entry unbound");
        }
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Apply any pending value from the bound data. Returns true if the text
    /// changed.
    pub fn process_binding_updates(&mut self) -> bool {
        let Some(binding) = &self.binding else {
            return false;
        };
        let mut pending = false;
        while binding.updates.try_recv().is_ok() {
            pending = true;
        }
        pending && self.pull_bound_value()
    }

    /// Block up to `timeout` for a binding update, then apply it.
    pub fn wait_for_binding_update(&mut self, timeout: Duration) -> bool {
        let Some(binding) = &self.binding else {
            return false;
        };
        if binding.updates.recv_timeout(timeout).is_err() {
            return false;
        }
        while binding.updates.try_recv().is_ok() {}
        self.pull_bound_value()
    }

    fn pull_bound_value(&mut self) -> bool {
        let Some(binding) = &self.binding else {
            return false;
        };
        match binding.data.get() {
            Ok(value) => {
                if value == self.state.text() {
                    return false;
                }
                self.replace_text(&value, ChangeSource::Binding)
            }
            Err(e) => {
                tracing::warn!("Failed to read bound value: {}", e);
                false
            }
        }
    }

    // =========================================================================
    // Change propagation
    // =========================================================================

    fn replace_text(&mut self, text: &str, source: ChangeSource) -> bool {
        let before = self.state.text();
        self.state.set_text(text);
        if self.state.text() == before {
            self.refresh.trigger();
            return false;
        }
        self.text_changed(source);
        true
    }

    fn text_changed(&mut self, source: ChangeSource) {
        let text = self.state.text();
        if source == ChangeSource::Local {
            if let Some(binding) = &self.binding {
                if let Err(e) = binding.data.set(text.clone()) {
                    tracing::warn!("Failed to write entry text to binding: {}", e);
                }
            }
        }
        if let Some(callback) = self.on_changed.as_mut() {
            callback(&text);
        }
        self.refresh.trigger();
    }
}

impl Drop for Entry {
    fn drop(&mut self) {
        self.unbind();
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("state", &self.state)
            .field("selection", &self.selection)
            .field("placeholder", &self.placeholder)
            .field("disabled", &self.disabled)
            .field("focused", &self.focused)
            .field("revealed", &self.revealed)
            .field("visible_rows", &self.visible_rows)
            .field("width", &self.width)
            .field("bound", &self.binding.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::new_string;
    use crate::clipboard::MemoryClipboard;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_on_changed_fires_on_set_text() {
        let mut entry = Entry::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        entry.on_changed(move |text| s.borrow_mut().push(text.to_string()));

        entry.set_text("Test");
        entry.set_text("Test");
        assert_eq!(*seen.borrow(), vec!["Test"]);
    }

    #[test]
    fn test_return_ignored_in_single_line() {
        let mut entry = Entry::new();
        entry.set_text("abc");
        entry.typed_key(KeyName::Return);
        assert_eq!(entry.text(), "abc");
    }

    #[test]
    fn test_password_display_is_masked() {
        let mut entry = Entry::new_password();
        entry.set_placeholder("secret");
        assert_eq!(entry.display_text(), "secret");
        entry.set_text("abc");
        assert_eq!(entry.display_text(), "•••");
        entry.set_password_revealed(true);
        assert_eq!(entry.display_text(), "abc");
    }

    #[test]
    fn test_disabled_allows_copy_only() {
        let mut entry = Entry::new();
        entry.set_text("Testing");
        entry.disable();
        let mut clipboard = MemoryClipboard::new();

        entry.typed_rune('x');
        assert!(entry.typed_shortcut(Shortcut::SelectAll, &mut clipboard));
        assert!(entry.typed_shortcut(Shortcut::Copy, &mut clipboard));
        assert!(!entry.typed_shortcut(Shortcut::Cut, &mut clipboard));
        assert_eq!(entry.text(), "Testing");
        assert_eq!(clipboard.content(), "Testing");
    }

    #[test]
    fn test_binding_roundtrip() {
        let data = new_string();
        data.set("from data".to_string()).unwrap();
        let mut entry = Entry::with_data(&data);
        assert!(entry.process_binding_updates());
        assert_eq!(entry.text(), "from data");

        entry.typed_rune('!');
        assert_eq!(data.get().unwrap(), "!from data");
        assert!(!entry.process_binding_updates());
    }

    #[test]
    fn test_drop_unregisters_listener() {
        let data = new_string();
        {
            let _entry = Entry::with_data(&data);
        }
        data.set("after drop".to_string()).unwrap();
    }
}
