//! Game engine module - the tick loop
//!
//! Wires a [`KeySource`](zip_trainer_input::KeySource), a
//! [`GameSession`](zip_trainer_core::GameSession) and a
//! [`LineRenderer`](zip_trainer_term::LineRenderer) together and drives them
//! at a fixed rate:
//!
//! ```text
//! tick -> poll_key -> session.on_tick(now, key) -> draw statuses -> next deadline
//! ```
//!
//! Everything runs on one task; no two ticks are ever in flight.

pub mod driver;

pub use zip_trainer_core as core;
pub use zip_trainer_input as input;
pub use zip_trainer_term as term;
pub use zip_trainer_types as types;

pub use driver::Driver;
