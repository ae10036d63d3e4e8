#![forbid(unsafe_code)]

//! Rendering of the manual document.
//!
//! [`ManualView`] draws the whole document (header, tile grid, footer) into
//! a buffer sized to the layout. The app copies the visible window of that
//! buffer into the frame.

use academy_core::geometry::{Rect, Sides};
use academy_render::buffer::Buffer;
use academy_render::cell::{Cell, StyleFlags};
use academy_render::drawing::Draw;
use academy_render::text::truncate;
use academy_widgets::{Alignment, Block, BorderType, Paragraph, Style, Widget};

use crate::content;
use crate::layout::{ManualLayout, TileSlot, body_lines};
use crate::registry::{ContentRegistry, SectionEntry, SectionId};
use crate::selection::Selection;
use crate::theme::{self, Glyphs, TileState};

/// Everything needed to draw one frame of the document.
#[derive(Debug, Clone, Copy)]
pub struct ManualView<'a> {
    pub registry: &'a ContentRegistry,
    pub layout: &'a ManualLayout,
    pub selection: Selection,
    pub focus: Option<SectionId>,
    pub hover: Option<SectionId>,
    pub glyphs: Glyphs,
}

impl ManualView<'_> {
    fn render_header(&self, rect: Rect, buf: &mut Buffer) {
        let border_type = match self.glyphs {
            Glyphs::Unicode => BorderType::Rounded,
            Glyphs::Ascii => BorderType::Ascii,
        };
        let block = Block::bordered()
            .border_type(border_type)
            .border_style(Style::new().fg(theme::border::IDLE))
            .style(Style::new().bg(theme::bg::PANEL));
        block.render(rect, buf);

        let inner = block.inner(rect);
        let title = match self.glyphs {
            Glyphs::Unicode => content::HEADER_TITLE,
            Glyphs::Ascii => content::HEADER_TITLE_ASCII,
        };
        Paragraph::new(title)
            .no_wrap()
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme::fg::HEADING).bold())
            .render(Rect::new(inner.x, inner.y, inner.width, 1), buf);
        if inner.height > 1 {
            Paragraph::new(content::HEADER_SUBTITLE)
                .no_wrap()
                .alignment(Alignment::Center)
                .style(Style::new().fg(theme::fg::MUTED))
                .render(Rect::new(inner.x, inner.y + 1, inner.width, 1), buf);
        }
    }

    fn render_tile(&self, entry: &SectionEntry, slot: &TileSlot, rect: Rect, buf: &mut Buffer) {
        let state = TileState {
            active: self.selection.is_expanded(entry.id),
            hovered: self.hover == Some(entry.id),
            focused: self.focus == Some(entry.id),
        };
        let (fill, edge, border_type) = theme::tile_chrome(state, self.glyphs);
        let block = Block::bordered()
            .border_type(border_type)
            .border_style(edge)
            .style(fill)
            .padding(Sides::horizontal(1));
        block.render(rect, buf);

        let inner = block.inner(rect);
        if inner.is_empty() {
            return;
        }
        let base = fill.apply(Cell::default());

        let icon = match self.glyphs {
            Glyphs::Unicode => entry.icon.glyph(),
            Glyphs::Ascii => entry.icon.ascii(),
        };
        let after_icon = buf.print_text_clipped(
            inner.x,
            inner.y,
            icon,
            base.with_fg(entry.icon.color()),
            inner.right(),
        );
        let title_x = after_icon.saturating_add(1);
        let available = inner.right().saturating_sub(title_x);
        let title = truncate(entry.title, available as usize);
        buf.print_text_clipped(
            title_x,
            inner.y,
            &title,
            base.with_fg(theme::fg::PRIMARY)
                .with_attrs(StyleFlags::BOLD),
            inner.right(),
        );

        if !state.active {
            return;
        }
        let body = base.with_fg(theme::fg::BODY);
        for (row, line) in body_lines(entry, slot.rect.width).iter().enumerate() {
            let Ok(row) = u16::try_from(row) else {
                break;
            };
            let y = inner.y.saturating_add(2 + row);
            if y >= inner.bottom() {
                break;
            }
            buf.print_text_clipped(inner.x, y, line, body, inner.right());
        }
    }

    fn render_footer(&self, rect: Rect, buf: &mut Buffer) {
        Paragraph::new(content::FOOTER_REMARK)
            .no_wrap()
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme::fg::MUTED))
            .render(Rect::new(rect.x, rect.y, rect.width, 1), buf);
        if rect.height > 1 {
            Paragraph::new(content::FOOTER_HINTS)
                .no_wrap()
                .alignment(Alignment::Center)
                .style(Style::new().fg(theme::fg::FAINT).dim())
                .render(Rect::new(rect.x, rect.y + 1, rect.width, 1), buf);
        }
    }
}

impl Widget for ManualView<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.push_scissor(area);
        buf.fill(area, Cell::default().with_bg(theme::bg::PAGE));

        let place = |rect: Rect| Rect::new(area.x + rect.x, area.y + rect.y, rect.width, rect.height);

        self.render_header(place(self.layout.header), buf);
        for slot in &self.layout.tiles {
            if let Some(entry) = self.registry.get(slot.id) {
                self.render_tile(entry, slot, place(slot.rect), buf);
            }
        }
        self.render_footer(place(self.layout.footer), buf);

        buf.pop_scissor();
    }
}

/// Render the full document into a fresh buffer the size of `view.layout`.
pub fn render_document(view: &ManualView<'_>) -> Buffer {
    let mut buf = Buffer::new(view.layout.width, view.layout.height);
    view.render(buf.area(), &mut buf);
    tracing::trace!(
        width = buf.width(),
        height = buf.height(),
        selected = %view.selection.current(),
        "document rendered"
    );
    buf
}
