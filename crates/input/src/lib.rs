//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s.

pub mod map;

pub use memory_master_types as types;

pub use map::{handle_key_event, should_quit};
