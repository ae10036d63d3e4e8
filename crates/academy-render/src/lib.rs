#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, frames, drawing, and terminal output.
//!
//! Widgets draw into a [`buffer::Buffer`]; the [`presenter::Presenter`]
//! diffs consecutive buffers and writes only the changed cells.

pub mod buffer;
pub mod cell;
pub mod drawing;
pub mod export;
pub mod frame;
pub mod presenter;
pub mod text;

pub use text::display_width;
