//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Full redraw per frame; the board is small enough that diffing has not
//! been worth the bookkeeping.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::term::fb::{CellStyle, FrameBuffer};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current_style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if current_style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    current_style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
            if y + 1 < fb.height() {
                self.stdout.queue(Print("\r\n"))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.stdout.queue(SetForegroundColor(Color::Rgb {
            r: style.fg.r,
            g: style.fg.g,
            b: style.fg.b,
        }))?;
        self.stdout.queue(SetBackgroundColor(Color::Rgb {
            r: style.bg.r,
            g: style.bg.g,
            b: style.bg.b,
        }))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        } else if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        } else {
            self.stdout.queue(SetAttribute(Attribute::Reset))?;
            self.stdout.queue(SetForegroundColor(Color::Rgb {
                r: style.fg.r,
                g: style.fg.g,
                b: style.fg.b,
            }))?;
            self.stdout.queue(SetBackgroundColor(Color::Rgb {
                r: style.bg.r,
                g: style.bg.g,
                b: style.bg.b,
            }))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
