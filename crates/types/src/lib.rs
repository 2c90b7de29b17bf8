//! Core types module - shared constants and configuration
//!
//! This module defines the timing constants and the game configuration used
//! throughout the application. It has no external dependencies, so it can be
//! used from the core state machine, the terminal layer and the input layer
//! alike.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INPUT_DELAY_MS` | 3000 | Countdown before the timing window opens |
//! | `INPUT_WINDOW_MS` | 1000 | Width of the timing window |
//! | `FPS` | 60 | Driver tick rate |
//!
//! A round looks like this on the elapsed-time axis:
//!
//! ```text
//! 0                 DELAY            DELAY+WINDOW
//! |---- too early ----|---- perfect ----|---- too slow ...
//! ```
//!
//! The window is half-open: a press at exactly `DELAY` is perfect, a press at
//! exactly `DELAY + WINDOW` is too slow.
//!
//! # Environment Variables
//!
//! [`GameConfig::from_env`] reads startup-time overrides:
//!
//! - `ZIP_TRAINER_DELAY_MS`: countdown length (default: 3000)
//! - `ZIP_TRAINER_WINDOW_MS`: window length (default: 1000)
//! - `ZIP_TRAINER_FPS`: tick rate (default: 60)
//! - `ZIP_TRAINER_TRIGGER`: trigger key, first character is used (default: "W")
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use zip_trainer_types::{GameConfig, TRIGGER_KEY};
//!
//! let config = GameConfig::default();
//! assert_eq!(config.trigger, TRIGGER_KEY);
//! assert_eq!(config.input_delay, Duration::from_secs(3));
//!
//! // Trigger matching is case-insensitive
//! assert!(config.is_trigger(Some('w')));
//! assert!(config.is_trigger(Some('W')));
//! assert!(!config.is_trigger(Some('q')));
//! assert!(!config.is_trigger(None));
//! ```

use std::time::Duration;

/// Countdown before the timing window opens (3000ms)
pub const INPUT_DELAY_MS: u64 = 3000;

/// Width of the timing window (1000ms)
pub const INPUT_WINDOW_MS: u64 = 1000;

/// Driver tick rate
pub const FPS: u32 = 60;

/// Default trigger key (matched case-insensitively)
pub const TRIGGER_KEY: char = 'W';

/// Game configuration, fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub input_delay: Duration,
    pub input_window: Duration,
    pub fps: u32,
    pub trigger: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            input_delay: Duration::from_millis(INPUT_DELAY_MS),
            input_window: Duration::from_millis(INPUT_WINDOW_MS),
            fps: FPS,
            trigger: TRIGGER_KEY,
        }
    }
}

impl GameConfig {
    /// Create from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let input_delay = lookup("ZIP_TRAINER_DELAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.input_delay);

        let input_window = lookup("ZIP_TRAINER_WINDOW_MS")
            .and_then(|s| s.trim().parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.input_window);

        let fps = lookup("ZIP_TRAINER_FPS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.fps);

        let trigger = lookup("ZIP_TRAINER_TRIGGER")
            .and_then(|s| s.trim().chars().next())
            .unwrap_or(defaults.trigger);

        Self {
            input_delay,
            input_window,
            fps: fps.max(1),
            trigger,
        }
    }

    /// Fixed interval between two driver ticks (`1 / fps` seconds).
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    /// End of the timing window, measured from round start.
    pub fn window_end(&self) -> Duration {
        self.input_delay + self.input_window
    }

    /// Whether this tick's key (if any) is the trigger.
    ///
    /// Comparison is case-insensitive; a missing key is never the trigger.
    pub fn is_trigger(&self, key: Option<char>) -> bool {
        match key {
            Some(ch) => ch.to_uppercase().eq(self.trigger.to_uppercase()),
            None => false,
        }
    }
}
