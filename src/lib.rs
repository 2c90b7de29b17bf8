//! zip-trainer (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binaries, the
//! integration tests and the benches can use `zip_trainer::{core,engine,input,term,types}`.

pub use zip_trainer_core as core;
pub use zip_trainer_engine as engine;
pub use zip_trainer_input as input;
pub use zip_trainer_term as term;
pub use zip_trainer_types as types;
