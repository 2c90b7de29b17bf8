//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the round rules and the status-line bookkeeping.
//! It has **no dependency** on the terminal, the input backend or the clock
//! source: time is passed into every tick, which makes it:
//!
//! - **Deterministic**: Same instants and keys produce the same frames
//! - **Testable**: Rounds can be replayed with synthetic instants
//! - **Allocation-free**: A tick returns a fixed-capacity [`TickFrame`]
//!
//! # Module Structure
//!
//! - [`game_state`]: the `Standby` / `Timing` / `GameOver` state machine
//! - [`status`]: the messages a tick can render
//! - [`display_line`]: padding for the single rewritable output line
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use zip_trainer_core::{GameSession, GameState, Status};
//! use zip_trainer_types::GameConfig;
//!
//! let mut session = GameSession::new(GameConfig::default());
//! let t0 = Instant::now();
//!
//! // Pressing the trigger starts a round
//! session.on_tick(t0, Some('w'));
//! assert_eq!(session.state(), GameState::Timing { started: t0 });
//!
//! // Half a second into the window, a press is perfect
//! let frame = session.on_tick(t0 + Duration::from_millis(3500), Some('W'));
//! assert_eq!(frame.as_slice(), &[Status::Now, Status::Perfect]);
//! assert_eq!(session.state(), GameState::GameOver);
//! ```

pub mod display_line;
pub mod game_state;
pub mod status;

pub use zip_trainer_types as types;

pub use display_line::DisplayLine;
pub use game_state::{GameSession, GameState, TickFrame};
pub use status::Status;
