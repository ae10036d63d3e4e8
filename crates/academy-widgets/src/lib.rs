#![forbid(unsafe_code)]

//! Widgets for the manual: bordered blocks and wrapped paragraphs.

pub mod block;
pub mod paragraph;
pub mod style;

pub use block::{Alignment, Block, BorderType};
pub use paragraph::Paragraph;
pub use style::Style;

use academy_core::geometry::Rect;
use academy_render::buffer::Buffer;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Buffer` within a given `Rect` and must
/// not draw outside it.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}
