#![forbid(unsafe_code)]

//! Writes buffers to the terminal.
//!
//! The presenter keeps the last presented buffer and emits only cells that
//! changed, moving the cursor with absolute positioning and switching colors
//! and attributes only when they differ from the previous written cell. A
//! size change (or the first frame) clears the screen and redraws in full.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};

use crate::buffer::Buffer;
use crate::cell::{Cell, CellContent, PackedRgba, StyleFlags};

/// What one `present` call wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentStats {
    /// Number of cells emitted.
    pub cells_written: usize,
    /// Whether the screen was cleared and fully redrawn.
    pub full_redraw: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PenState {
    fg: PackedRgba,
    bg: PackedRgba,
    attrs: StyleFlags,
}

/// Diffing ANSI presenter.
pub struct Presenter<W: Write> {
    writer: W,
    previous: Option<Buffer>,
    pen: Option<PenState>,
}

impl<W: Write> Presenter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            previous: None,
            pen: None,
        }
    }

    /// Forget the previous frame so the next `present` redraws everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Borrow the underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Present `buffer`, placing the cursor at `cursor` (hidden when `None`).
    pub fn present(
        &mut self,
        buffer: &Buffer,
        cursor: Option<(u16, u16)>,
    ) -> io::Result<PresentStats> {
        let previous = self
            .previous
            .take()
            .filter(|p| p.width() == buffer.width() && p.height() == buffer.height());
        let full_redraw = previous.is_none();

        if full_redraw {
            queue!(self.writer, SetAttribute(Attribute::Reset), ResetColor)?;
            queue!(self.writer, Clear(ClearType::All))?;
            self.pen = None;
        }

        let mut cells_written = 0;
        for y in 0..buffer.height() {
            let mut cursor_x: Option<u16> = None;
            for (x, cell) in buffer.row_cells(y).iter().enumerate() {
                let x = x as u16;
                if cell.content.is_continuation() {
                    continue;
                }
                let unchanged = previous
                    .as_ref()
                    .and_then(|p| p.get(x, y))
                    .is_some_and(|old| old == cell);
                if unchanged {
                    continue;
                }

                if cursor_x != Some(x) {
                    queue!(self.writer, MoveTo(x, y))?;
                }
                self.write_cell(cell)?;
                cells_written += 1;
                cursor_x = Some(x + cell.content.width().max(1) as u16);
            }
        }

        queue!(self.writer, SetAttribute(Attribute::Reset), ResetColor)?;
        self.pen = None;
        match cursor {
            Some((x, y)) => queue!(self.writer, MoveTo(x, y), Show)?,
            None => queue!(self.writer, Hide)?,
        }
        self.writer.flush()?;

        #[cfg(feature = "tracing")]
        tracing::trace!(cells_written, full_redraw, "frame presented");

        self.previous = Some(buffer.clone());
        Ok(PresentStats {
            cells_written,
            full_redraw,
        })
    }

    fn write_cell(&mut self, cell: &Cell) -> io::Result<()> {
        let pen = PenState {
            fg: cell.fg,
            bg: cell.bg,
            attrs: cell.attrs,
        };
        if self.pen != Some(pen) {
            let attrs_changed = self.pen.is_none_or(|p| p.attrs != pen.attrs);
            if attrs_changed {
                // Attribute::Reset also clears colors, so colors are re-sent below.
                queue!(self.writer, SetAttribute(Attribute::Reset))?;
                for (flag, attr) in [
                    (StyleFlags::BOLD, Attribute::Bold),
                    (StyleFlags::DIM, Attribute::Dim),
                    (StyleFlags::ITALIC, Attribute::Italic),
                    (StyleFlags::UNDERLINE, Attribute::Underlined),
                    (StyleFlags::REVERSE, Attribute::Reverse),
                ] {
                    if pen.attrs.contains(flag) {
                        queue!(self.writer, SetAttribute(attr))?;
                    }
                }
            }
            if attrs_changed || self.pen.is_none_or(|p| p.fg != pen.fg) {
                queue!(self.writer, SetForegroundColor(to_color(pen.fg)))?;
            }
            if attrs_changed || self.pen.is_none_or(|p| p.bg != pen.bg) {
                queue!(self.writer, SetBackgroundColor(to_color(pen.bg)))?;
            }
            self.pen = Some(pen);
        }

        let ch = match cell.content {
            CellContent::Char(c) => c,
            CellContent::Empty | CellContent::Continuation => ' ',
        };
        queue!(self.writer, Print(ch))
    }
}

fn to_color(color: PackedRgba) -> Color {
    if color.is_transparent() {
        Color::Reset
    } else {
        Color::Rgb {
            r: color.r(),
            g: color.g(),
            b: color.b(),
        }
    }
}
