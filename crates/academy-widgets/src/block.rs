#![forbid(unsafe_code)]

use academy_core::geometry::{Rect, Sides};
use academy_render::buffer::Buffer;
use academy_render::cell::Cell;
use academy_render::drawing::{BorderChars, Draw};
use academy_render::text::{display_width, truncate};

use crate::{Style, Widget};

/// A widget that draws a filled block with an optional border and title.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block<'a> {
    bordered: bool,
    border_style: Style,
    border_type: BorderType,
    title: Option<&'a str>,
    title_alignment: Alignment,
    style: Style,
    padding: Sides,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Horizontal offset of content `content_width` wide inside `available`.
    pub fn offset(self, content_width: u16, available: u16) -> u16 {
        let slack = available.saturating_sub(content_width);
        match self {
            Self::Left => 0,
            Self::Center => slack / 2,
            Self::Right => slack,
        }
    }
}

/// Border glyph set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    #[default]
    Rounded,
    Heavy,
    Ascii,
    AsciiHeavy,
}

impl BorderType {
    pub const fn chars(self) -> BorderChars {
        match self {
            Self::Rounded => BorderChars::ROUNDED,
            Self::Heavy => BorderChars::HEAVY,
            Self::Ascii => BorderChars::ASCII,
            Self::AsciiHeavy => BorderChars::ASCII_HEAVY,
        }
    }
}

impl<'a> Block<'a> {
    /// A borderless block.
    pub fn new() -> Self {
        Self::default()
    }

    /// A block with a border on all sides.
    pub fn bordered() -> Self {
        Self {
            bordered: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn title_alignment(mut self, alignment: Alignment) -> Self {
        self.title_alignment = alignment;
        self
    }

    /// Fill style for the whole block area.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: Sides) -> Self {
        self.padding = padding;
        self
    }

    /// Rows and columns taken by border and padding: `(horizontal, vertical)`.
    pub fn chrome_size(&self) -> (u16, u16) {
        let border = if self.bordered { 2 } else { 0 };
        (
            border + self.padding.horizontal_sum(),
            border + self.padding.vertical_sum(),
        )
    }

    /// The area left for content inside border and padding.
    pub fn inner(&self, area: Rect) -> Rect {
        let area = if self.bordered {
            area.inner(Sides::all(1))
        } else {
            area
        };
        area.inner(self.padding)
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let Some(title) = self.title else {
            return;
        };
        // Title sits on the top border, two columns in from each corner.
        let available = area.width.saturating_sub(4);
        if available == 0 {
            return;
        }
        let text = truncate(title, available as usize);
        let width = display_width(&text) as u16;
        let x = area.x + 2 + self.title_alignment.offset(width, available);
        let cell = self.border_style.apply(self.style.apply(Cell::default()));
        buf.print_text_clipped(x, area.y, &text, cell, area.right() - 2);
    }
}

impl Widget for Block<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let fill = self.style.apply(Cell::default());
        buf.draw_rect_filled(area, fill);

        if self.bordered {
            let border_cell = self.border_style.apply(fill);
            buf.draw_border(area, self.border_type.chars(), border_cell);
            self.render_title(area, buf);
        }
    }
}
