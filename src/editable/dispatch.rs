//! Applies [`TextEditMsg`]s to an [`EditableState`].

use super::buffer::TextBufferMut;
use super::context::EditContext;
use super::messages::{MoveTarget, TextEditMsg};
use super::state::EditableState;

/// Apply a text edit message to a state.
///
/// Returns true if anything changed (movement always counts). Clipboard
/// messages need a clipboard in `ctx`; without one they do nothing.
pub fn apply_text_edit_msg<B: TextBufferMut>(
    state: &mut EditableState<B>,
    msg: &TextEditMsg,
    ctx: &mut EditContext<'_>,
) -> bool {
    match msg {
        // === Movement ===
        TextEditMsg::Move(target) => {
            apply_move(state, *target, false, ctx.page_rows);
            true
        }
        TextEditMsg::MoveWithSelection(target) => {
            apply_move(state, *target, true, ctx.page_rows);
            true
        }

        // === Insertion ===
        TextEditMsg::InsertChar(ch) => state.insert_char(*ch),
        TextEditMsg::InsertText(text) => state.insert_text(text),
        TextEditMsg::InsertNewline => state.insert_newline(),

        // === Deletion ===
        TextEditMsg::DeleteBackward => state.delete_backward(),
        TextEditMsg::DeleteForward => state.delete_forward(),

        // === Selection ===
        TextEditMsg::SelectAll => {
            state.select_all();
            true
        }
        TextEditMsg::SelectWord => {
            state.select_word();
            true
        }

        // === Clipboard ===
        TextEditMsg::Copy => {
            let (Some(clipboard), Some(text)) = (ctx.clipboard.as_deref_mut(), state.copy_text())
            else {
                return false;
            };
            clipboard.set_content(&text);
            true
        }
        TextEditMsg::Cut => {
            let Some(clipboard) = ctx.clipboard.as_deref_mut() else {
                return false;
            };
            match state.cut() {
                Some(text) => {
                    clipboard.set_content(&text);
                    true
                }
                None => false,
            }
        }
        TextEditMsg::Paste => {
            let Some(clipboard) = ctx.clipboard.as_deref_mut() else {
                return false;
            };
            let text = clipboard.content();
            state.paste(&text)
        }

        // === Undo/Redo ===
        TextEditMsg::Undo => state.undo(),
        TextEditMsg::Redo => state.redo(),
    }
}

/// Apply movement to an EditableState.
fn apply_move<B: TextBufferMut>(
    state: &mut EditableState<B>,
    target: MoveTarget,
    extend_selection: bool,
    page_rows: usize,
) {
    match target {
        MoveTarget::Left => state.move_left(extend_selection),
        MoveTarget::Right => state.move_right(extend_selection),
        MoveTarget::Up => state.move_up(extend_selection),
        MoveTarget::Down => state.move_down(extend_selection),
        MoveTarget::LineStart => state.move_line_start(extend_selection),
        MoveTarget::LineEnd => state.move_line_end(extend_selection),
        MoveTarget::PageUp => state.page_up(page_rows, extend_selection),
        MoveTarget::PageDown => state.page_down(page_rows, extend_selection),
    }
}
