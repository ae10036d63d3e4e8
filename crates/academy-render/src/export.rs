#![forbid(unsafe_code)]

//! Plain-text export of buffers.
//!
//! Used for `--dump` style one-shot renders and by the test harness.

use crate::buffer::Buffer;
use crate::cell::CellContent;

/// Convert a `Buffer` to a plain text string.
///
/// Each row becomes one line. Empty cells become spaces. Continuation cells
/// (trailing halves of wide characters) are skipped so wide characters
/// occupy their natural display width in the output string.
pub fn buffer_to_text(buf: &Buffer) -> String {
    (0..buf.height())
        .map(|y| row_text(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The text of one row (see [`buffer_to_text`]).
pub fn row_text(buf: &Buffer, y: u16) -> String {
    buf.row_cells(y)
        .iter()
        .filter_map(|cell| match cell.content {
            CellContent::Empty => Some(' '),
            CellContent::Char(c) => Some(c),
            CellContent::Continuation => None,
        })
        .collect()
}

/// Same as [`buffer_to_text`] with trailing spaces trimmed from each row.
pub fn buffer_to_trimmed_text(buf: &Buffer) -> String {
    (0..buf.height())
        .map(|y| row_text(buf, y).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
