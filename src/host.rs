//! Terminal-side game host.
//!
//! Drawing is done from snapshots, so the only collaborator call that needs
//! real work here is audio feedback, which rings the terminal bell.

use std::io::{self, Write};

use crate::core::{FeedbackError, GameHost};
use crate::types::FeedbackKind;

pub struct TerminalHost<W: Write = io::Stdout> {
    out: W,
    sound: bool,
}

impl TerminalHost<io::Stdout> {
    pub fn new(sound: bool) -> Self {
        Self::with_writer(io::stdout(), sound)
    }
}

impl<W: Write> TerminalHost<W> {
    pub fn with_writer(out: W, sound: bool) -> Self {
        Self { out, sound }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> GameHost for TerminalHost<W> {
    fn play_feedback(&mut self, kind: FeedbackKind) -> Result<(), FeedbackError> {
        if !self.sound {
            return Ok(());
        }
        let bells: &[u8] = match kind {
            FeedbackKind::Click => b"\x07",
            FeedbackKind::Failure => b"\x07\x07",
        };
        self.out.write_all(bells)?;
        self.out.flush()?;
        Ok(())
    }
}
