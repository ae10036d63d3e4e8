#![forbid(unsafe_code)]

use academy_core::geometry::Rect;
use academy_render::buffer::Buffer;
use academy_render::drawing::Draw;
use academy_render::text::{display_width, truncate, wrap};

use crate::{Alignment, Block, Style, Widget};

/// A widget that renders multi-line text, word-wrapped by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<'a> {
    text: &'a str,
    block: Option<Block<'a>>,
    style: Style,
    alignment: Alignment,
    wrap: bool,
}

impl<'a> Paragraph<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            block: None,
            style: Style::default(),
            alignment: Alignment::Left,
            wrap: true,
        }
    }

    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Disable wrapping: lines longer than the area are truncated with `…`.
    #[must_use]
    pub fn no_wrap(mut self) -> Self {
        self.wrap = false;
        self
    }

    /// The lines this paragraph renders at `width` columns of text.
    pub fn lines(&self, width: u16) -> Vec<String> {
        if self.wrap {
            wrap(self.text, width as usize)
        } else {
            self.text
                .lines()
                .map(|line| truncate(line.trim(), width as usize))
                .collect()
        }
    }

    /// Rows needed to render at `width` total columns, including any block
    /// chrome.
    pub fn line_count(&self, width: u16) -> u16 {
        let (chrome_w, chrome_h) = self.block.as_ref().map_or((0, 0), Block::chrome_size);
        let lines = self.lines(width.saturating_sub(chrome_w)).len();
        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .saturating_add(chrome_h)
    }
}

impl Widget for Paragraph<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let text_area = match &self.block {
            Some(block) => {
                block.render(area, buf);
                block.inner(area)
            }
            None => area,
        };
        if text_area.is_empty() {
            return;
        }

        buf.push_scissor(text_area);
        for (row, line) in self.lines(text_area.width).iter().enumerate() {
            let Ok(row) = u16::try_from(row) else {
                break;
            };
            if row >= text_area.height {
                break;
            }
            let y = text_area.y + row;
            let width = display_width(line) as u16;
            let x = text_area.x + self.alignment.offset(width, text_area.width);
            // Text inherits the background already painted underneath.
            let base = buf.get(x, y).copied().unwrap_or_default().blank();
            let cell = self.style.apply(base);
            buf.print_text_clipped(x, y, line, cell, text_area.right());
        }
        buf.pop_scissor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_render::cell::{Cell, PackedRgba};

    fn row(buf: &Buffer, y: u16) -> String {
        buf.row_cells(y)
            .iter()
            .filter(|c| !c.content.is_continuation())
            .map(|c| c.content.as_char().unwrap_or(' '))
            .collect()
    }

    #[test]
    fn wraps_into_area() {
        let mut buf = Buffer::new(10, 3);
        Paragraph::new("alpha beta gamma").render(buf.area(), &mut buf);
        assert_eq!(row(&buf, 0), "alpha beta");
        assert_eq!(row(&buf, 1), "gamma     ");
    }

    #[test]
    fn clips_to_height() {
        let mut buf = Buffer::new(5, 1);
        Paragraph::new("one two three").render(buf.area(), &mut buf);
        assert_eq!(row(&buf, 0), "one  ");
    }

    #[test]
    fn center_alignment() {
        let mut buf = Buffer::new(7, 1);
        Paragraph::new("abc")
            .alignment(Alignment::Center)
            .render(buf.area(), &mut buf);
        assert_eq!(row(&buf, 0), "  abc  ");
    }

    #[test]
    fn no_wrap_truncates() {
        let p = Paragraph::new("abcdefgh").no_wrap();
        assert_eq!(p.lines(5), vec!["abcd…"]);
    }

    #[test]
    fn line_count_includes_block_chrome() {
        let p = Paragraph::new("alpha beta gamma").block(Block::bordered());
        // 12 columns minus 2 for the border leaves 10 for text: two lines.
        assert_eq!(p.line_count(12), 4);
    }

    #[test]
    fn text_keeps_painted_background() {
        let mut buf = Buffer::new(4, 1);
        let bg = PackedRgba::rgb(5, 5, 5);
        buf.fill(buf.area(), Cell::default().with_bg(bg));
        Paragraph::new("hi").render(buf.area(), &mut buf);
        assert_eq!(buf.get(0, 0).unwrap().bg, bg);
    }
}
