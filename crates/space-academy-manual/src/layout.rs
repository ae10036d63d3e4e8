#![forbid(unsafe_code)]

//! Document layout.
//!
//! The manual is laid out as one tall document: header, a grid of tiles in
//! registry order, footer. The terminal shows a vertical window onto it
//! (see `ManualModel::scroll`). All rects here are in document coordinates.
//!
//! The grid has one column on narrow terminals and two once the content
//! width reaches [`TWO_COLUMN_MIN_WIDTH`]. Tiles in a row share the row's
//! height, so an expanded tile stretches its neighbor.

use std::fmt;
use std::str::FromStr;

use academy_core::geometry::{Rect, Sides};
use academy_render::text::wrap;

use crate::registry::{ContentRegistry, SectionEntry, SectionId};
use crate::selection::Selection;

/// Content never grows wider than this; wider terminals center it.
pub const MAX_CONTENT_WIDTH: u16 = 100;
/// Minimum content width for the two-column grid.
pub const TWO_COLUMN_MIN_WIDTH: u16 = 72;
pub const PAGE_PADDING: Sides = Sides::new(1, 2, 1, 2);
pub const COLUMN_GAP: u16 = 2;
pub const ROW_GAP: u16 = 1;
pub const HEADER_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 2;
/// Border plus one column of padding on each side.
pub const TILE_CHROME_X: u16 = 4;
/// Top and bottom border.
pub const TILE_CHROME_Y: u16 = 2;

/// Grid column policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Columns {
    /// Follow the width breakpoint.
    #[default]
    Auto,
    One,
    Two,
}

impl Columns {
    /// Column count for a given content width.
    pub fn resolve(self, content_width: u16) -> u16 {
        match self {
            Self::Auto if content_width >= TWO_COLUMN_MIN_WIDTH => 2,
            Self::Auto | Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl fmt::Display for Columns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::One => "1",
            Self::Two => "2",
        })
    }
}

impl FromStr for Columns {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "1" | "one" => Ok(Self::One),
            "2" | "two" => Ok(Self::Two),
            other => Err(format!("expected auto, 1 or 2, got '{other}'")),
        }
    }
}

/// Direction for keyboard focus movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Placement of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSlot {
    pub id: SectionId,
    /// Render position in the registry.
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub rect: Rect,
    pub expanded: bool,
}

/// Computed placement of everything in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualLayout {
    /// Document width (the terminal width).
    pub width: u16,
    /// Total document height.
    pub height: u16,
    pub columns: u16,
    pub header: Rect,
    pub tiles: Vec<TileSlot>,
    pub footer: Rect,
}

impl ManualLayout {
    /// Lay out the manual for a terminal `width` columns wide.
    pub fn compute(
        width: u16,
        registry: &ContentRegistry,
        selection: &Selection,
        columns: Columns,
    ) -> Self {
        let available = width.saturating_sub(PAGE_PADDING.horizontal_sum());
        let content_width = available.min(MAX_CONTENT_WIDTH);
        let x0 = PAGE_PADDING.left + (available - content_width) / 2;
        let cols = columns.resolve(content_width);

        let mut y = PAGE_PADDING.top;
        let header = Rect::new(x0, y, content_width, HEADER_HEIGHT);
        y = y.saturating_add(HEADER_HEIGHT + ROW_GAP);

        let track = content_width.saturating_sub(COLUMN_GAP * (cols - 1));
        let column_width = |column: usize| {
            let remainder = if column + 1 == cols as usize {
                track % cols
            } else {
                0
            };
            track / cols + remainder
        };

        let entries: Vec<&SectionEntry> = registry.iter().collect();
        let mut tiles = Vec::with_capacity(entries.len());
        for (row, chunk) in entries.chunks(cols as usize).enumerate() {
            let row_height = chunk
                .iter()
                .enumerate()
                .map(|(column, entry)| {
                    tile_height(entry, column_width(column), selection.is_expanded(entry.id))
                })
                .max()
                .unwrap_or(0);

            let mut x = x0;
            for (column, entry) in chunk.iter().enumerate() {
                let tile_width = column_width(column);
                tiles.push(TileSlot {
                    id: entry.id,
                    index: row * cols as usize + column,
                    row,
                    column,
                    rect: Rect::new(x, y, tile_width, row_height),
                    expanded: selection.is_expanded(entry.id),
                });
                x = x.saturating_add(tile_width + COLUMN_GAP);
            }
            y = y.saturating_add(row_height + ROW_GAP);
        }

        let footer = Rect::new(x0, y, content_width, FOOTER_HEIGHT);
        let height = y.saturating_add(FOOTER_HEIGHT + PAGE_PADDING.bottom);

        tracing::trace!(width, height, columns = cols, "layout computed");
        Self {
            width,
            height,
            columns: cols,
            header,
            tiles,
            footer,
        }
    }

    /// The slot for `id`.
    pub fn tile(&self, id: SectionId) -> Option<&TileSlot> {
        self.tiles.iter().find(|t| t.id == id)
    }

    /// The tile under document position `(x, y)`.
    pub fn tile_at(&self, x: u16, y: u16) -> Option<SectionId> {
        self.tiles
            .iter()
            .find(|t| t.rect.contains(x, y))
            .map(|t| t.id)
    }

    /// Largest useful scroll offset for a viewport `viewport_height` rows tall.
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.height.saturating_sub(viewport_height)
    }

    /// The tile reached by moving from `from` in `direction`.
    ///
    /// Left/Right step through render order; Up/Down move a whole grid row.
    /// Movement stops at the edges.
    pub fn neighbor(&self, from: SectionId, direction: Direction) -> SectionId {
        let Some(slot) = self.tile(from) else {
            return from;
        };
        let cols = self.columns as usize;
        let target = match direction {
            Direction::Left => slot.index.checked_sub(1),
            Direction::Right => Some(slot.index + 1),
            Direction::Up => slot.index.checked_sub(cols),
            Direction::Down => Some(slot.index + cols),
        };
        target
            .and_then(|i| self.tiles.get(i))
            .map_or(from, |t| t.id)
    }

    /// The tile after (or before) `from` in render order, wrapping around.
    pub fn cycle(&self, from: SectionId, forward: bool) -> SectionId {
        let len = self.tiles.len();
        let Some(slot) = self.tile(from) else {
            return from;
        };
        if len == 0 {
            return from;
        }
        let next = if forward {
            (slot.index + 1) % len
        } else {
            (slot.index + len - 1) % len
        };
        self.tiles[next].id
    }
}

/// Body text of `entry` wrapped for a tile `tile_width` columns wide.
pub fn body_lines(entry: &SectionEntry, tile_width: u16) -> Vec<String> {
    wrap(entry.body, tile_width.saturating_sub(TILE_CHROME_X) as usize)
}

/// Height of a tile: border, title row, and (when expanded) a spacer row
/// plus the wrapped body.
pub fn tile_height(entry: &SectionEntry, tile_width: u16, expanded: bool) -> u16 {
    let body = if expanded {
        let lines = u16::try_from(body_lines(entry, tile_width).len()).unwrap_or(u16::MAX);
        lines.saturating_add(1)
    } else {
        0
    };
    (TILE_CHROME_Y + 1).saturating_add(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: u16, selected: SectionId, columns: Columns) -> ManualLayout {
        let registry = ContentRegistry::standard();
        ManualLayout::compute(width, &registry, &Selection::new(selected), columns)
    }

    #[test]
    fn narrow_terminal_uses_one_column() {
        let l = layout(60, SectionId::Intro, Columns::Auto);
        assert_eq!(l.columns, 1);
        let xs: Vec<u16> = l.tiles.iter().map(|t| t.rect.x).collect();
        assert!(xs.iter().all(|&x| x == xs[0]));
    }

    #[test]
    fn wide_terminal_uses_two_columns() {
        let l = layout(120, SectionId::Intro, Columns::Auto);
        assert_eq!(l.columns, 2);
        assert_eq!(l.tiles[0].row, l.tiles[1].row);
        assert!(l.tiles[1].rect.x > l.tiles[0].rect.right());
    }

    #[test]
    fn breakpoint_is_content_width() {
        let at = TWO_COLUMN_MIN_WIDTH + PAGE_PADDING.horizontal_sum();
        assert_eq!(layout(at, SectionId::Intro, Columns::Auto).columns, 2);
        assert_eq!(layout(at - 1, SectionId::Intro, Columns::Auto).columns, 1);
    }

    #[test]
    fn column_override() {
        assert_eq!(layout(200, SectionId::Intro, Columns::One).columns, 1);
        assert_eq!(layout(40, SectionId::Intro, Columns::Two).columns, 2);
    }

    #[test]
    fn content_is_capped_and_centered() {
        let l = layout(200, SectionId::Intro, Columns::Auto);
        assert_eq!(l.header.width, MAX_CONTENT_WIDTH);
        let left = l.header.x;
        let right = 200 - l.header.right();
        assert!(left.abs_diff(right) <= 1);
    }

    #[test]
    fn tiles_follow_registry_order() {
        for selected in SectionId::ALL {
            let l = layout(120, selected, Columns::Auto);
            let ids: Vec<SectionId> = l.tiles.iter().map(|t| t.id).collect();
            assert_eq!(ids, SectionId::ALL.to_vec());
        }
    }

    #[test]
    fn only_selected_tile_is_expanded() {
        let l = layout(80, SectionId::Memory, Columns::Auto);
        let expanded: Vec<SectionId> = l.tiles.iter().filter(|t| t.expanded).map(|t| t.id).collect();
        assert_eq!(expanded, vec![SectionId::Memory]);
    }

    #[test]
    fn collapsed_tiles_are_three_rows_in_one_column() {
        let l = layout(60, SectionId::Intro, Columns::Auto);
        for slot in l.tiles.iter().filter(|t| !t.expanded) {
            assert_eq!(slot.rect.height, TILE_CHROME_Y + 1);
        }
        let intro = l.tile(SectionId::Intro).unwrap();
        assert!(intro.rect.height > TILE_CHROME_Y + 2);
    }

    #[test]
    fn row_neighbors_share_height() {
        let l = layout(120, SectionId::Brain, Columns::Auto);
        let intro = l.tile(SectionId::Intro).unwrap();
        let brain = l.tile(SectionId::Brain).unwrap();
        assert_eq!(intro.rect.height, brain.rect.height);
        assert!(!intro.expanded);
    }

    #[test]
    fn tiles_do_not_overlap() {
        let l = layout(120, SectionId::Achievements, Columns::Auto);
        for (i, a) in l.tiles.iter().enumerate() {
            for b in &l.tiles[i + 1..] {
                assert!(a.rect.intersection_opt(&b.rect).is_none(), "{a:?} overlaps {b:?}");
            }
        }
        assert!(l.footer.y >= l.tiles.last().unwrap().rect.bottom());
        assert!(l.height >= l.footer.bottom());
    }

    #[test]
    fn tile_at_hits_and_misses() {
        let l = layout(80, SectionId::Intro, Columns::Auto);
        let brain = l.tile(SectionId::Brain).unwrap().rect;
        assert_eq!(l.tile_at(brain.x + 1, brain.y + 1), Some(SectionId::Brain));
        assert_eq!(l.tile_at(0, 0), None);
        assert_eq!(l.tile_at(l.header.x + 1, l.header.y + 1), None);
    }

    #[test]
    fn neighbor_moves_in_grid() {
        let l = layout(120, SectionId::Intro, Columns::Auto);
        assert_eq!(l.neighbor(SectionId::Intro, Direction::Right), SectionId::Brain);
        assert_eq!(l.neighbor(SectionId::Intro, Direction::Down), SectionId::Memory);
        assert_eq!(l.neighbor(SectionId::Intro, Direction::Left), SectionId::Intro);
        assert_eq!(l.neighbor(SectionId::Intro, Direction::Up), SectionId::Intro);
        assert_eq!(
            l.neighbor(SectionId::Achievements, Direction::Down),
            SectionId::Achievements
        );
    }

    #[test]
    fn cycle_wraps() {
        let l = layout(60, SectionId::Intro, Columns::Auto);
        assert_eq!(l.cycle(SectionId::Achievements, true), SectionId::Intro);
        assert_eq!(l.cycle(SectionId::Intro, false), SectionId::Achievements);
    }

    #[test]
    fn max_scroll() {
        let l = layout(60, SectionId::Intro, Columns::Auto);
        assert_eq!(l.max_scroll(l.height + 10), 0);
        assert_eq!(l.max_scroll(l.height - 5), 5);
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        for width in 0..12 {
            let l = layout(width, SectionId::Achievements, Columns::Auto);
            assert_eq!(l.tiles.len(), SectionId::ALL.len());
        }
    }

    #[test]
    fn parse_columns() {
        assert_eq!("auto".parse::<Columns>(), Ok(Columns::Auto));
        assert_eq!("2".parse::<Columns>(), Ok(Columns::Two));
        assert_eq!("One".parse::<Columns>(), Ok(Columns::One));
        assert!("3".parse::<Columns>().is_err());
    }
}
