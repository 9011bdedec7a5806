//! TerminalRenderer: flushes a text frame to a real terminal.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{cursor, event, style::Print, terminal, QueueableCommand};

use crate::view::TextFrame;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<TextFrame>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(event::EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(event::DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `frame`, rewriting only rows that changed since the last draw.
    pub fn draw(&mut self, frame: &TextFrame) -> Result<()> {
        self.buf.clear();
        let full = match &self.last {
            Some(prev) => prev.width() != frame.width() || prev.height() != frame.height(),
            None => true,
        };
        if full {
            self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        }
        for y in 0..frame.height() {
            let line = frame.line(y);
            let unchanged = !full && self.last.as_ref().is_some_and(|prev| prev.line(y) == line);
            if unchanged {
                continue;
            }
            self.buf.queue(cursor::MoveTo(0, y as u16))?;
            self.buf.queue(Print(line))?;
        }
        self.flush_buf()?;
        self.last = Some(frame.clone());
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
