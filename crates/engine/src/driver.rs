//! Fixed-rate tick driver.
//!
//! Ticks are scheduled on a tokio interval. Each deadline is the previous
//! deadline plus the period, so timer jitter never accumulates into drift,
//! and a late tick is followed by immediate catch-up ticks instead of being
//! skipped.

use std::future::Future;
use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use tokio::time::{self, MissedTickBehavior};

use crate::core::{GameSession, GameState};
use crate::input::KeySource;
use crate::term::LineRenderer;
use crate::types::GameConfig;

pub struct Driver<K, W: Write> {
    session: GameSession,
    keys: K,
    renderer: LineRenderer<W>,
    ticks: u64,
}

impl<K: KeySource, W: Write> Driver<K, W> {
    pub fn new(config: GameConfig, keys: K, renderer: LineRenderer<W>) -> Self {
        Self {
            session: GameSession::new(config),
            keys,
            renderer,
            ticks: 0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    pub fn renderer(&self) -> &LineRenderer<W> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut LineRenderer<W> {
        &mut self.renderer
    }

    /// Ticks executed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one poll / update / render cycle at `now`.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        let key = self.keys.poll_key();
        let before = self.session.state();

        let frame = self.session.on_tick(now, key);
        for status in &frame {
            self.renderer.draw(status)?;
        }

        let after = self.session.state();
        if before != after {
            tracing::debug!(
                target: "engine",
                tick = self.ticks,
                from = state_name(before),
                to = state_name(after),
                last = ?frame.last(),
                "transition"
            );
        }
        if let Some(outcome) = frame.iter().find(|s| s.is_outcome()) {
            tracing::info!(target: "engine", tick = self.ticks, %outcome, "round_over");
        }

        self.ticks += 1;
        Ok(())
    }

    /// Tick at the configured rate until `shutdown` completes.
    ///
    /// The game itself has no exit condition; the caller decides what ends
    /// the loop (termination signals in the binary, a timer in tests) and
    /// restores the terminal afterwards.
    pub async fn run<F>(&mut self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        let period = self.session.config().tick_interval();
        tracing::info!(
            target: "engine",
            fps = self.session.config().fps,
            period_us = period.as_micros() as u64,
            "driver_start"
        );

        self.renderer.draw(&self.session.prompt())?;

        let mut interval = time::interval_at(time::Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = interval.tick() => {
                    self.tick(time::Instant::now().into_std())?;
                }
            }
        }

        tracing::info!(target: "engine", ticks = self.ticks, "driver_stop");
        Ok(())
    }
}

fn state_name(state: GameState) -> &'static str {
    match state {
        GameState::Standby => "standby",
        GameState::Timing { .. } => "timing",
        GameState::GameOver => "game_over",
    }
}
