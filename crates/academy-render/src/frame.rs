#![forbid(unsafe_code)]

//! Frame = Buffer + cursor metadata for one render pass.
//!
//! `Model::view()` draws into a `Frame`; the runtime hands its buffer to the
//! presenter afterwards.

use academy_core::geometry::Rect;

use crate::buffer::Buffer;

/// The render target passed to `Model::view()`.
#[derive(Debug)]
pub struct Frame {
    /// The cell grid to draw into.
    pub buffer: Buffer,
    /// Cursor position, or `None` to keep it hidden.
    pub cursor: Option<(u16, u16)>,
}

impl Frame {
    /// Create a blank frame.
    pub fn new(width: u16, height: u16) -> Self {
        Self::from_buffer(Buffer::new(width, height))
    }

    /// Wrap an existing buffer.
    pub fn from_buffer(buffer: Buffer) -> Self {
        Self {
            buffer,
            cursor: None,
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// The full frame area.
    pub fn bounds(&self) -> Rect {
        self.buffer.area()
    }

    /// Consume the frame, returning its buffer.
    pub fn into_buffer(self) -> Buffer {
        self.buffer
    }
}
