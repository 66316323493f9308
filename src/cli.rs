//! Command-line argument parsing for the demo binary
//!
//! Supports:
//! - Initial text and entry mode (single-line, multi-line, password)
//! - Wrap mode and viewport rows
//! - A comma-separated key script to replay

use std::str::FromStr;

use clap::Parser;

use entry_kit::editable::{KeyName, Shortcut, Wrapping};

/// Replay keystrokes against a text entry
#[derive(Parser, Debug)]
#[command(name = "entry-demo", version, about = "Replay keystrokes against a text entry")]
pub struct CliArgs {
    /// Initial text; `\n` sequences become line breaks
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// Allow line breaks
    #[arg(short, long)]
    pub multi_line: bool,

    /// Obscure the text and refuse clipboard export
    #[arg(short, long, conflicts_with = "multi_line")]
    pub password: bool,

    /// Wrap mode: off, truncate, break, word
    #[arg(long, value_parser = Wrapping::from_str)]
    pub wrap: Option<Wrapping>,

    /// Rows in the viewport (page size)
    #[arg(long, value_name = "N")]
    pub visible_rows: Option<usize>,

    /// Use the system clipboard instead of an in-memory one
    #[arg(long)]
    pub system_clipboard: bool,

    /// Steps such as `Right,Shift+,Down,Shift-,Delete,type:hi,Copy`
    #[arg(value_name = "SCRIPT")]
    pub script: Option<String>,
}

impl CliArgs {
    /// Initial text with escaped newlines expanded
    pub fn initial_text(&self) -> String {
        self.text.replace("\\n", "\n")
    }

    pub fn steps(&self) -> Result<Vec<ScriptStep>, String> {
        match &self.script {
            Some(script) => parse_script(script),
            None => Ok(Vec::new()),
        }
    }
}

/// One step of a key script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// `Shift+`: hold Shift
    Press(KeyName),
    /// `Shift-`: release Shift
    Release(KeyName),
    /// A typed named key
    Key(KeyName),
    /// `type:<text>`: typed characters
    Type(String),
    Shortcut(Shortcut),
}

/// Parse a comma-separated script. Empty tokens are skipped.
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, String> {
    script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_step)
        .collect()
}

fn parse_step(token: &str) -> Result<ScriptStep, String> {
    if let Some(text) = token.strip_prefix("type:") {
        return Ok(ScriptStep::Type(text.to_string()));
    }
    if let Some(name) = token.strip_suffix('+') {
        return parse_shift(name).map(ScriptStep::Press);
    }
    if let Some(name) = token.strip_suffix('-') {
        return parse_shift(name).map(ScriptStep::Release);
    }
    if let Ok(shortcut) = token.parse::<Shortcut>() {
        return Ok(ScriptStep::Shortcut(shortcut));
    }
    token
        .parse::<KeyName>()
        .map(ScriptStep::Key)
        .map_err(|e| e.to_string())
}

fn parse_shift(name: &str) -> Result<KeyName, String> {
    let key = name.parse::<KeyName>().map_err(|e| e.to_string())?;
    if key.is_shift() {
        Ok(key)
    } else {
        Err(format!("Only Shift can be held: {}", name))
    }
}
