//! Memory Master (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports
//! them as `memory_master::{core,input,term,types}` and adds the pieces the
//! terminal binary needs: environment configuration, file logging, a frame
//! clock and the terminal-side [`GameHost`](crate::core::GameHost).

pub mod clock;
pub mod config;
pub mod host;
pub mod logging;

pub use memory_master_core as core;
pub use memory_master_input as input;
pub use memory_master_term as term;
pub use memory_master_types as types;
