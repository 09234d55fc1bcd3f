//! Session command handlers.

mod run_session;

pub use run_session::{RunSessionCommand, RunSessionHandler, RunSessionResult};
