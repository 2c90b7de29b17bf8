//! Game state module - the round state machine
//!
//! A session moves through three states:
//!
//! ```text
//!            trigger                 outcome
//! Standby ----------> Timing --------------------> GameOver
//!                       ^                              |
//!                       +---------- trigger -----------+
//! ```
//!
//! Every driver tick calls [`GameSession::on_tick`] with the current monotonic
//! time and at most one key. The session decides what to render and whether to
//! transition; it never touches the terminal itself.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;

use crate::status::Status;
use crate::types::GameConfig;

/// Statuses one tick renders, in order. A tick shows at most a window
/// message followed by an outcome.
pub type TickFrame = ArrayVec<Status, 2>;

/// Current phase of the session.
///
/// The round start lives inside `Timing`, so it only exists while a round is
/// running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    Standby,
    Timing {
        started: Instant,
    },
    GameOver,
}

/// Owns the state machine for one process.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    state: GameState,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: GameState::Standby,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Start of the running round, if any.
    pub fn round_start(&self) -> Option<Instant> {
        match self.state {
            GameState::Timing { started } => Some(started),
            GameState::Standby | GameState::GameOver => None,
        }
    }

    /// The standby prompt for the configured trigger.
    pub fn prompt(&self) -> Status {
        Status::Prompt {
            trigger: self.config.trigger,
        }
    }

    /// Advance the state machine by one tick.
    pub fn on_tick(&mut self, now: Instant, key: Option<char>) -> TickFrame {
        let pressed = self.config.is_trigger(key);
        let mut frame = TickFrame::new();

        match self.state {
            GameState::Standby => {
                if pressed {
                    self.start_round(now);
                } else {
                    frame.push(self.prompt());
                }
            }
            GameState::Timing { started } => {
                let elapsed = now.saturating_duration_since(started);
                self.tick_timing(elapsed, pressed, &mut frame);
            }
            GameState::GameOver => {
                // The outcome stays on screen until the next round.
                if pressed {
                    self.start_round(now);
                }
            }
        }

        frame
    }

    fn tick_timing(&mut self, elapsed: Duration, pressed: bool, frame: &mut TickFrame) {
        let delay = self.config.input_delay;

        if elapsed < delay {
            frame.push(Status::Countdown(delay - elapsed));
            if pressed {
                frame.push(Status::TooEarly);
                self.state = GameState::GameOver;
            }
        } else if elapsed < self.config.window_end() {
            frame.push(Status::Now);
            if pressed {
                frame.push(Status::Perfect);
                self.state = GameState::GameOver;
            }
        } else {
            frame.push(Status::TooSlow);
            self.state = GameState::GameOver;
        }
    }

    fn start_round(&mut self, now: Instant) {
        self.state = GameState::Timing { started: now };
    }
}
