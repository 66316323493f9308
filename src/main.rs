//! entry-demo: replay a key script against a text entry and print the result

use anyhow::{anyhow, Result};
use clap::Parser;

use entry_kit::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
use entry_kit::editable::EditConstraints;
use entry_kit::{Entry, EntryConfig};

mod cli;

use cli::{CliArgs, ScriptStep};

fn main() -> Result<()> {
    entry_kit::tracing::init();

    let args = CliArgs::parse();
    let steps = args.steps().map_err(|e| anyhow!(e))?;
    let config = EntryConfig::load();

    let mut constraints = if args.password {
        EditConstraints::password()
    } else if args.multi_line {
        EditConstraints::multi_line()
    } else {
        EditConstraints::single_line()
    };
    if let Some(wrap) = args.wrap {
        constraints = constraints.with_wrapping(wrap);
    }

    let mut entry = Entry::with_config(constraints, &config);
    if let Some(rows) = args.visible_rows {
        entry.set_visible_rows(rows);
    }
    entry.set_text(&args.initial_text());
    entry.focus_gained();

    let mut clipboard: Box<dyn Clipboard> = if args.system_clipboard {
        Box::new(SystemClipboard::new())
    } else {
        Box::new(MemoryClipboard::new())
    };

    for step in &steps {
        tracing::debug!(?step, "replaying");
        match step {
            ScriptStep::Press(key) => entry.key_down(*key),
            ScriptStep::Release(key) => entry.key_up(*key),
            ScriptStep::Key(key) => entry.typed_key(*key),
            ScriptStep::Type(text) => text.chars().for_each(|ch| entry.typed_rune(ch)),
            ScriptStep::Shortcut(shortcut) => {
                entry.typed_shortcut(*shortcut, clipboard.as_mut());
            }
        }
    }

    println!("text: {:?}", entry.display_text());
    println!("cursor: {}", entry.cursor());
    match entry.state().selection() {
        Some(selection) => println!(
            "selection: {} -> {} {:?}",
            selection.anchor,
            selection.head,
            entry.selected_text()
        ),
        None => println!("selection: none"),
    }
    if args.system_clipboard || !clipboard.content().is_empty() {
        println!("clipboard: {:?}", clipboard.content());
    }

    Ok(())
}
