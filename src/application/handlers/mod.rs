//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod session;

pub use session::{RunSessionCommand, RunSessionHandler, RunSessionResult};
