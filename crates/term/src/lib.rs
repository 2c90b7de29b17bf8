//! Terminal output module.
//!
//! A deliberately small rendering layer: the game only ever shows one line of
//! text, rewritten in place. This crate owns that line and the raw-mode
//! lifetime of the terminal.
//!
//! - [`LineRenderer`]: carriage-return rendering with padding over stale text
//! - [`TerminalGuard`]: raw mode acquired once, restored on every exit path

pub mod guard;
pub mod renderer;

pub use zip_trainer_core as core;
pub use zip_trainer_types as types;

pub use guard::{install_panic_hook, TerminalGuard};
pub use renderer::LineRenderer;
