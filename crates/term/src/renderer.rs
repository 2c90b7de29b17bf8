//! LineRenderer: writes status lines to a terminal in place.
//!
//! Output is a single evolving line: every draw returns the cursor to column 0
//! with a carriage return and overwrites the previous text. No newline is
//! written until [`LineRenderer::finish`].

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{style::Print, QueueableCommand};

use crate::core::{DisplayLine, Status};

pub struct LineRenderer<W: Write = io::Stdout> {
    out: W,
    line: DisplayLine,
}

impl LineRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: DisplayLine::new(),
        }
    }

    /// Show `status`, padded over anything longer that was shown before.
    pub fn draw(&mut self, status: &Status) -> Result<()> {
        self.draw_text(&status.to_string())
    }

    /// Show arbitrary text on the status line.
    ///
    /// If the write fails the line is invalidated, so the same text is
    /// written again on the next draw.
    pub fn draw_text(&mut self, text: &str) -> Result<()> {
        if !self.line.set(text) {
            return Ok(());
        }
        if let Err(err) = self.write_line() {
            self.line.invalidate();
            return Err(err.into());
        }
        Ok(())
    }

    fn write_line(&mut self) -> io::Result<()> {
        self.out.queue(Print('\r'))?;
        self.out.queue(Print(self.line.as_str()))?;
        self.out.flush()
    }

    /// Leave the status line so later output starts on a fresh line.
    pub fn finish(&mut self) -> Result<()> {
        self.out.queue(Print("\r\n"))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn line(&self) -> &DisplayLine {
        &self.line
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}
