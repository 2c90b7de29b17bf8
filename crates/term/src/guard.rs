//! Scoped ownership of the terminal's raw input mode.

use std::io::{self, Write};
use std::sync::Once;

use anyhow::Result;
use crossterm::{cursor, terminal, QueueableCommand};

/// Raw, non-echoing terminal mode for as long as the guard lives.
///
/// [`TerminalGuard::release`] restores the original mode; dropping the guard
/// without releasing restores it on a best-effort basis.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Switch the terminal to raw mode and hide the cursor.
    pub fn acquire() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = Self { active: true };

        let mut stdout = io::stdout();
        if let Err(err) = stdout
            .queue(cursor::Hide)
            .and_then(|out| out.flush())
        {
            let _ = guard.release();
            return Err(err.into());
        }

        tracing::debug!(target: "term", "raw_mode_enabled");
        Ok(guard)
    }

    /// Restore cooked mode and the cursor. Safe to call more than once.
    pub fn release(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal()?;
        tracing::debug!(target: "term", "raw_mode_disabled");
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            tracing::warn!(target: "term", error = %err, "terminal_restore_failed");
        }
    }
}

/// Undo raw mode even if the cursor could not be shown again.
fn restore_terminal() -> Result<()> {
    let mut stdout = io::stdout();
    let shown = stdout.queue(cursor::Show).and_then(|out| out.flush());
    terminal::disable_raw_mode()?;
    shown?;
    Ok(())
}

/// Restore the terminal before the default panic report is printed.
pub fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            tracing::error!(target: "runtime.panic", %info, "panic");
            default_panic(info);
        }));
    });
}
