#![forbid(unsafe_code)]

//! Cell grid.
//!
//! `Buffer` is a row-major grid of [`Cell`]s with a scissor stack for
//! clipping. All drawing goes through [`Buffer::set`], which keeps wide
//! characters consistent: a wide head is always followed by a continuation
//! cell, and overwriting either half blanks the other.

use academy_core::geometry::Rect;

use crate::cell::{Cell, CellContent};

/// A grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    scissor_stack: Vec<Rect>,
}

impl Buffer {
    /// Create a buffer filled with empty cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
            scissor_stack: vec![Rect::from_size(width, height)],
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Get a cell, or `None` when out of bounds.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable cell, or `None` when out of bounds.
    ///
    /// Bypasses scissor and wide-character bookkeeping.
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Set a cell, respecting the current scissor rect.
    ///
    /// A wide character whose trailing half would fall outside the scissor
    /// is not drawn at all.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let scissor = self.current_scissor();
        if !scissor.contains(x, y) {
            return;
        }
        let wide = cell.content.width() == 2;
        if wide && !scissor.contains(x.saturating_add(1), y) {
            return;
        }

        self.release_wide_neighbors(x, y);
        if wide {
            self.release_wide_neighbors(x + 1, y);
        }

        self.set_raw(x, y, cell);
        if wide {
            self.set_raw(x + 1, y, cell.with_content(CellContent::Continuation));
        }
    }

    /// Set a cell without scissor or wide-character handling.
    pub fn set_raw(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Blank the other half of a wide character occupying `(x, y)`.
    fn release_wide_neighbors(&mut self, x: u16, y: u16) {
        let Some(existing) = self.get(x, y).copied() else {
            return;
        };
        if existing.content.is_continuation() && x > 0 {
            if let Some(head) = self.get_mut(x - 1, y) {
                *head = head.blank();
            }
        } else if existing.content.width() == 2 {
            if let Some(tail) = self.get_mut(x + 1, y) {
                *tail = tail.blank();
            }
        }
    }

    /// Fill a rectangle (clipped to the scissor) with `cell`.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let clipped = rect.intersection(&self.current_scissor());
        for y in clipped.top()..clipped.bottom() {
            for x in clipped.left()..clipped.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Reset every cell to the default.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cells of one row (empty slice when out of bounds).
    pub fn row_cells(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Push a clipping rect; it is intersected with the current one.
    pub fn push_scissor(&mut self, rect: Rect) {
        let next = rect.intersection(&self.current_scissor());
        self.scissor_stack.push(next);
    }

    /// Pop the innermost clipping rect. The base (full buffer) is never popped.
    pub fn pop_scissor(&mut self) {
        if self.scissor_stack.len() > 1 {
            self.scissor_stack.pop();
        }
    }

    /// The active clipping rect.
    pub fn current_scissor(&self) -> Rect {
        self.scissor_stack
            .last()
            .copied()
            .unwrap_or_else(|| self.area())
    }

    /// Copy `src_rect` of `src` into this buffer with its top-left at
    /// `(dst_x, dst_y)`. Cells are copied verbatim; the destination scissor
    /// still applies.
    pub fn copy_from(&mut self, src: &Buffer, src_rect: Rect, dst_x: u16, dst_y: u16) {
        let src_rect = src_rect.intersection(&src.area());
        let scissor = self.current_scissor();
        for dy in 0..src_rect.height {
            for dx in 0..src_rect.width {
                let (tx, ty) = (dst_x.saturating_add(dx), dst_y.saturating_add(dy));
                if !scissor.contains(tx, ty) {
                    continue;
                }
                if let Some(cell) = src.get(src_rect.x + dx, src_rect.y + dy) {
                    self.set_raw(tx, ty, *cell);
                }
            }
        }
    }

    /// Whether both buffers have identical dimensions and cells.
    pub fn content_eq(&self, other: &Buffer) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}
