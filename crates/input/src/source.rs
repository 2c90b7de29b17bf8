//! Non-blocking key sources.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event};
use tokio::sync::Notify;

use crate::map::{is_interrupt, key_char};

/// The one input capability the game loop needs.
pub trait KeySource {
    /// Return the next pending input unit, or `None` when nothing is buffered.
    ///
    /// Must never block.
    fn poll_key(&mut self) -> Option<char>;
}

/// Reads keys from the terminal through crossterm.
///
/// Expects the terminal to already be in raw mode. Ctrl-C is forwarded to the
/// interrupt handle instead of being returned as a key.
pub struct TerminalKeys {
    interrupt: Arc<Notify>,
}

impl TerminalKeys {
    pub fn new(interrupt: Arc<Notify>) -> Self {
        Self { interrupt }
    }

    /// Handle that is notified when the player presses Ctrl-C.
    pub fn interrupt(&self) -> Arc<Notify> {
        Arc::clone(&self.interrupt)
    }

    fn read_one(&mut self) -> std::io::Result<Option<char>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if is_interrupt(key) => {
                tracing::debug!(target: "input", "interrupt_key");
                self.interrupt.notify_one();
                Ok(None)
            }
            Event::Key(key) => Ok(key_char(key)),
            _ => Ok(None),
        }
    }
}

impl KeySource for TerminalKeys {
    fn poll_key(&mut self) -> Option<char> {
        match self.read_one() {
            Ok(key) => key,
            Err(err) => {
                tracing::debug!(target: "input", error = %err, "key_read_failed");
                None
            }
        }
    }
}

/// Replays keys at fixed poll indices.
///
/// Poll `n` (zero-based) returns the key scripted for `n`, every other poll
/// returns `None`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    presses: BTreeMap<u64, char>,
    polls: u64,
}

impl ScriptedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `key` for poll number `index`.
    pub fn press_at(mut self, index: u64, key: char) -> Self {
        self.presses.insert(index, key);
        self
    }

    /// Number of polls served so far.
    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self) -> Option<char> {
        let key = self.presses.remove(&self.polls);
        self.polls += 1;
        key
    }
}

impl<K: KeySource + ?Sized> KeySource for Box<K> {
    fn poll_key(&mut self) -> Option<char> {
        (**self).poll_key()
    }
}
