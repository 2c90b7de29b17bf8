//! Terminal reflex trainer (default binary).
//!
//! Shows a countdown, then a short window; press the trigger key inside it.
//! Runs until terminated (SIGINT, SIGTERM, SIGHUP, or Ctrl-C on the keyboard),
//! restoring the terminal on the way out.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Notify;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use zip_trainer::engine::Driver;
use zip_trainer::input::TerminalKeys;
use zip_trainer::term::{install_panic_hook, LineRenderer, TerminalGuard};
use zip_trainer::types::GameConfig;

fn main() -> Result<()> {
    let _log_guard = configure_logging()?;
    let config = GameConfig::from_env();
    tracing::info!(target: "runtime", ?config, "startup");

    let mut guard = TerminalGuard::acquire().context("failed to enter raw terminal mode")?;
    install_panic_hook();

    let result = run(config);

    // Always try to restore terminal state.
    if let Err(err) = guard.release() {
        tracing::warn!(target: "runtime", error = %err, "terminal_restore_failed");
    }
    result
}

fn run(config: GameConfig) -> Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build runtime")?;

    rt.block_on(async {
        let keys = TerminalKeys::new(Arc::new(Notify::new()));
        let interrupt = keys.interrupt();

        let mut driver = Driver::new(config, keys, LineRenderer::stdout());
        let result = driver.run(shutdown_signal(interrupt)).await;
        let finished = driver.renderer_mut().finish();
        result.and(finished)
    })
}

/// Completes on the first termination request.
async fn shutdown_signal(interrupt: Arc<Notify>) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(err) => {
                tracing::warn!(target: "runtime", error = %err, "sigterm_handler_unavailable");
                return interrupt_or_ctrl_c(interrupt).await;
            }
        };
        let mut hangup = match signal(SignalKind::hangup()) {
            Ok(s) => s,
            Err(err) => {
                tracing::warn!(target: "runtime", error = %err, "sighup_handler_unavailable");
                return interrupt_or_ctrl_c(interrupt).await;
            }
        };

        tokio::select! {
            _ = interrupt_or_ctrl_c(interrupt) => {}
            _ = term.recv() => tracing::info!(target: "runtime", "sigterm"),
            _ = hangup.recv() => tracing::info!(target: "runtime", "sighup"),
        }
    }

    #[cfg(not(unix))]
    interrupt_or_ctrl_c(interrupt).await;
}

async fn interrupt_or_ctrl_c(interrupt: Arc<Notify>) {
    tokio::select! {
        _ = interrupt.notified() => tracing::info!(target: "runtime", "interrupt_key"),
        res = tokio::signal::ctrl_c() => match res {
            Ok(()) => tracing::info!(target: "runtime", "sigint"),
            Err(err) => {
                tracing::warn!(target: "runtime", error = %err, "sigint_handler_unavailable");
                std::future::pending::<()>().await;
            }
        },
    }
}

/// Log to the file named by `ZIP_TRAINER_LOG`, if set.
///
/// Nothing is ever logged to the terminal; it belongs to the status line.
fn configure_logging() -> Result<Option<WorkerGuard>> {
    let Some(path) = std::env::var_os("ZIP_TRAINER_LOG").filter(|p| !p.is_empty()) else {
        return Ok(None);
    };
    let path = Path::new(&path);
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .context("ZIP_TRAINER_LOG must name a file")?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(()) => Ok(Some(guard)),
        // Global subscriber already installed; drop guard so the writer shuts down.
        Err(_) => Ok(None),
    }
}
