//! Key mapping from terminal events to input units.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Character carried by a key press, if any.
///
/// Releases, auto-repeats, non-character keys and Ctrl/Alt chords carry
/// nothing; a terminal sends those as control or escape bytes, not the letter.
pub fn key_char(key: KeyEvent) -> Option<char> {
    if key.kind != KeyEventKind::Press
        || key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => Some(ch),
        _ => None,
    }
}

/// Check if the key is Ctrl-C, which raw mode delivers as a key instead of SIGINT.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
