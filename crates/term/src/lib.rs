//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. No widget
//! or layout library: the view renders into a framebuffer that the renderer
//! flushes to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view a pure function of a `GameSnapshot`
//! - Only send changed cells to the terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use memory_master_core as core;
pub use memory_master_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
