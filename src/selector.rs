//! Interactive key selection.
//!
//! When neither a key nor `--all` is given, the user picks which entry to
//! reveal from a numbered menu. A secret with a single key skips the menu.

use std::io::{BufRead, Write};

use crate::constants::prompt;
use crate::errors::ViewSecretError;

/// The user's resolved choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Reveal every entry.
    AllEntries,
    /// Exit without revealing anything.
    QuitNoAction,
    /// Reveal one named entry.
    NamedEntry(String),
}

/// Present `entry_names` on `out`, read one line from `input`, and resolve it.
///
/// `entry_names` is expected in sorted order; menu numbers follow it.
///
/// # Errors
///
/// Returns an error if:
/// - `entry_names` is empty
/// - The input matches no key, menu number, or token
/// - Writing the menu or reading the line fails
pub fn select_interactively<W: Write, R: BufRead>(
    out: &mut W,
    input: &mut R,
    entry_names: &[&str],
) -> Result<Selection, ViewSecretError> {
    match entry_names {
        [] => return Err(ViewSecretError::SecretEmpty),
        [only] => {
            writeln!(out, "{} {}", prompt::SINGLE_KEY_DESCRIPTION, only)?;
            return Ok(Selection::NamedEntry(only.to_string()));
        }
        _ => {}
    }

    render_menu(out, entry_names)?;

    // End of stream reads zero bytes and resolves like an empty line
    let mut buf = Vec::new();
    input.read_until(b'\n', &mut buf)?;
    let line = String::from_utf8_lossy(&buf);

    let selection = resolve_selection(&line, entry_names);
    if selection.is_err() {
        // terminate the prompt line before the caller reports the error
        writeln!(out)?;
    }
    selection
}

/// Write the numbered key menu followed by the selection prompt.
pub fn render_menu<W: Write>(out: &mut W, entry_names: &[&str]) -> std::io::Result<()> {
    writeln!(out, "{}", prompt::MENU_HEADER)?;
    for (idx, name) in entry_names.iter().enumerate() {
        writeln!(out, "  {}) {}", idx + 1, name)?;
    }
    writeln!(out, "  a) all (default)")?;
    writeln!(out, "  q) quit")?;
    write!(out, "{}", prompt::SELECTION_PROMPT)?;
    out.flush()
}

/// Resolve one line of user input against the menu.
///
/// Key names win over the `all`/`quit` tokens so that a key literally named
/// `q` can still be selected by name.
pub fn resolve_selection(line: &str, entry_names: &[&str]) -> Result<Selection, ViewSecretError> {
    let choice = line.trim();

    if choice.is_empty() {
        return Ok(Selection::AllEntries);
    }

    if let Some(name) = entry_names.iter().find(|name| **name == choice) {
        return Ok(Selection::NamedEntry(name.to_string()));
    }

    if prompt::ALL_TOKENS.iter().any(|token| *token == choice) {
        return Ok(Selection::AllEntries);
    }

    if prompt::QUIT_TOKENS.iter().any(|token| *token == choice) {
        return Ok(Selection::QuitNoAction);
    }

    if let Ok(number) = choice.parse::<usize>()
        && (1..=entry_names.len()).contains(&number)
    {
        return Ok(Selection::NamedEntry(entry_names[number - 1].to_string()));
    }

    Err(ViewSecretError::InvalidSelection(choice.to_string()))
}
