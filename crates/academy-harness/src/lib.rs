#![forbid(unsafe_code)]

//! Test helpers for rendered buffers.
//!
//! Re-exports the plain-text export functions and adds on-screen lookup so
//! tests can assert on what a user would read and click where a user would
//! click.

use academy_render::buffer::Buffer;
use academy_render::cell::CellContent;

pub use academy_core::geometry::Rect;
pub use academy_render::export::{buffer_to_text, buffer_to_trimmed_text, row_text};

/// Find the first on-screen cell position `(x, y)` where `needle` starts.
///
/// Columns are cell columns, so wide characters before the match count
/// twice.
pub fn find_text(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
    for y in 0..buf.height() {
        let cells = buf.row_cells(y);
        let mut columns = Vec::with_capacity(cells.len());
        let mut text = String::with_capacity(cells.len());
        for (x, cell) in cells.iter().enumerate() {
            let ch = match cell.content {
                CellContent::Empty => ' ',
                CellContent::Char(c) => c,
                CellContent::Continuation => continue,
            };
            columns.extend(std::iter::repeat_n(x as u16, ch.len_utf8()));
            text.push(ch);
        }
        if let Some(byte_idx) = text.find(needle) {
            return Some((columns[byte_idx], y));
        }
    }
    None
}

/// Whether `needle` appears anywhere on screen (within a single row).
pub fn contains_text(buf: &Buffer, needle: &str) -> bool {
    find_text(buf, needle).is_some()
}

/// Count the rows on which `needle` appears.
pub fn count_rows_containing(buf: &Buffer, needle: &str) -> usize {
    (0..buf.height())
        .filter(|&y| row_text(buf, y).contains(needle))
        .count()
}
