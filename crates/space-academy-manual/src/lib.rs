#![forbid(unsafe_code)]

//! Space Academy AI Training Manual.
//!
//! A full-screen terminal manual: a header, a grid of six section tiles and
//! a footer. Exactly one section is expanded at a time; clicking a tile (or
//! pressing its number) expands it and collapses the others.
//!
//! The crate is split the way the runtime expects:
//! - [`registry`] and [`content`]: the fixed, ordered section data
//! - [`selection`]: the one piece of content state
//! - [`layout`] and [`view`]: pure projections of state onto a buffer
//! - [`app`]: the [`Model`](academy_runtime::Model) tying input to state
//! - [`cli`] and [`logging`]: the binary's configuration surface

pub mod app;
pub mod cli;
pub mod content;
pub mod layout;
pub mod logging;
pub mod registry;
pub mod selection;
pub mod theme;
pub mod view;

pub use app::{ManualModel, ManualMsg};
pub use registry::{ContentRegistry, SectionEntry, SectionId};
pub use selection::Selection;
