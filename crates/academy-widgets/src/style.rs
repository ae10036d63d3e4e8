#![forbid(unsafe_code)]

use academy_render::cell::{Cell, PackedRgba, StyleFlags};

/// Colors and attributes applied on top of a cell.
///
/// `None` colors leave the underlying cell's color in place, so a widget can
/// draw text over a background painted by its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<PackedRgba>,
    pub bg: Option<PackedRgba>,
    pub attrs: StyleFlags,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::BOLD);
        self
    }

    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::DIM);
        self
    }

    /// Layer this style over `cell`.
    pub fn apply(&self, cell: Cell) -> Cell {
        Cell {
            content: cell.content,
            fg: self.fg.unwrap_or(cell.fg),
            bg: self.bg.unwrap_or(cell.bg),
            attrs: cell.attrs.union(self.attrs),
        }
    }

    /// Layer `other` over this style.
    #[must_use]
    pub fn patch(self, other: Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: self.attrs.union(other.attrs),
        }
    }
}
