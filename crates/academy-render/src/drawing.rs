#![forbid(unsafe_code)]

//! Drawing primitives for the buffer.
//!
//! Helpers on top of [`Buffer::set`] so widgets can draw borders, text, and
//! filled regions without repeating cell loops. All operations respect the
//! scissor stack.

use academy_core::geometry::Rect;

use crate::buffer::Buffer;
use crate::cell::{Cell, CellContent};

/// Characters used to draw a border around a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    /// Rounded corners.
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    /// Heavy (thick) border.
    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };

    /// ASCII-only border.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };

    /// ASCII border used to mark emphasis when box-drawing is unavailable.
    pub const ASCII_HEAVY: Self = Self {
        top_left: '#',
        top_right: '#',
        bottom_left: '#',
        bottom_right: '#',
        horizontal: '=',
        vertical: '#',
    };
}

/// Drawing operations on a cell grid.
pub trait Draw {
    /// Fill `rect` with `cell`.
    fn draw_rect_filled(&mut self, rect: Rect, cell: Cell);

    /// Print `text` starting at `(x, y)`, clipped to the buffer width.
    ///
    /// Returns the column after the last drawn character.
    fn print_text(&mut self, x: u16, y: u16, text: &str, base_cell: Cell) -> u16;

    /// Print `text` starting at `(x, y)`, stopping before column `max_x`.
    ///
    /// Wide characters that would straddle `max_x` are not drawn.
    fn print_text_clipped(&mut self, x: u16, y: u16, text: &str, base_cell: Cell, max_x: u16)
    -> u16;

    /// Draw a border on the edge cells of `rect`.
    fn draw_border(&mut self, rect: Rect, chars: BorderChars, base_cell: Cell);
}

impl Draw for Buffer {
    fn draw_rect_filled(&mut self, rect: Rect, cell: Cell) {
        self.fill(rect, cell);
    }

    fn print_text(&mut self, x: u16, y: u16, text: &str, base_cell: Cell) -> u16 {
        self.print_text_clipped(x, y, text, base_cell, self.width())
    }

    fn print_text_clipped(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        base_cell: Cell,
        max_x: u16,
    ) -> u16 {
        use unicode_width::UnicodeWidthChar;

        let mut cx = x;
        for c in text.chars() {
            let width = UnicodeWidthChar::width(c).unwrap_or(0);
            if width == 0 {
                continue;
            }
            if cx >= max_x || cx.saturating_add(width as u16) > max_x {
                break;
            }

            self.set(cx, y, base_cell.with_content(CellContent::from_char(c)));
            cx = cx.saturating_add(width as u16);
        }
        cx
    }

    fn draw_border(&mut self, rect: Rect, chars: BorderChars, base_cell: Cell) {
        if rect.is_empty() {
            return;
        }

        let make_cell = |c: char| base_cell.with_content(CellContent::from_char(c));
        let (left, top) = (rect.left(), rect.top());
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        for x in left..=right {
            self.set(x, top, make_cell(chars.horizontal));
            self.set(x, bottom, make_cell(chars.horizontal));
        }
        for y in top..=bottom {
            self.set(left, y, make_cell(chars.vertical));
            self.set(right, y, make_cell(chars.vertical));
        }

        self.set(left, top, make_cell(chars.top_left));
        self.set(right, top, make_cell(chars.top_right));
        self.set(left, bottom, make_cell(chars.bottom_left));
        self.set(right, bottom, make_cell(chars.bottom_right));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_at(buf: &Buffer, x: u16, y: u16) -> Option<char> {
        buf.get(x, y).and_then(|c| c.content.as_char())
    }

    #[test]
    fn print_text_basic() {
        let mut buf = Buffer::new(10, 1);
        let end = buf.print_text(1, 0, "hi", Cell::default());
        assert_eq!(end, 3);
        assert_eq!(char_at(&buf, 1, 0), Some('h'));
        assert_eq!(char_at(&buf, 2, 0), Some('i'));
    }

    #[test]
    fn print_text_clips_at_max_x() {
        let mut buf = Buffer::new(10, 1);
        let end = buf.print_text_clipped(0, 0, "abcdef", Cell::default(), 3);
        assert_eq!(end, 3);
        assert_eq!(char_at(&buf, 3, 0), None);
    }

    #[test]
    fn print_text_skips_straddling_wide_char() {
        let mut buf = Buffer::new(10, 1);
        let end = buf.print_text_clipped(0, 0, "a🚀", Cell::default(), 2);
        assert_eq!(end, 1);
    }

    #[test]
    fn border_corners() {
        let mut buf = Buffer::new(4, 3);
        buf.draw_border(buf.area(), BorderChars::ROUNDED, Cell::default());
        assert_eq!(char_at(&buf, 0, 0), Some('╭'));
        assert_eq!(char_at(&buf, 3, 0), Some('╮'));
        assert_eq!(char_at(&buf, 0, 2), Some('╰'));
        assert_eq!(char_at(&buf, 3, 2), Some('╯'));
        assert_eq!(char_at(&buf, 1, 0), Some('─'));
        assert_eq!(char_at(&buf, 0, 1), Some('│'));
        assert_eq!(char_at(&buf, 1, 1), None);
    }

    #[test]
    fn border_on_empty_rect_is_noop() {
        let mut buf = Buffer::new(4, 3);
        buf.draw_border(Rect::new(1, 1, 0, 2), BorderChars::ROUNDED, Cell::default());
        assert!(buf.cells().iter().all(|c| c.content == CellContent::Empty));
    }

    #[test]
    fn filled_rect_then_ascii_border() {
        let mut buf = Buffer::new(4, 3);
        buf.draw_rect_filled(buf.area(), Cell::from_char('.'));
        buf.draw_border(buf.area(), BorderChars::ASCII, Cell::default());
        assert_eq!(char_at(&buf, 1, 1), Some('.'));
        assert_eq!(char_at(&buf, 0, 0), Some('+'));
        assert_eq!(char_at(&buf, 1, 0), Some('-'));
    }
}
