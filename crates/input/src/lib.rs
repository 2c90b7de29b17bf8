//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the game rules. It turns
//! `crossterm` key events into plain characters behind the [`KeySource`]
//! capability, so the driver only ever asks "is there a key right now?".
//! [`ScriptedKeys`] stands in for the terminal in tests.

pub mod map;
pub mod source;

pub use zip_trainer_types as types;

pub use map::{is_interrupt, key_char};
pub use source::{KeySource, ScriptedKeys, TerminalKeys};
