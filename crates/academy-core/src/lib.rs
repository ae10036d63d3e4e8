#![forbid(unsafe_code)]

//! Core: terminal lifecycle, geometry, and canonical input events.
//!
//! Everything above this crate sees input only as [`event::Event`] values,
//! never as raw crossterm types, so models can be driven by synthetic events
//! in tests exactly as they are by a live terminal.

pub mod event;
pub mod geometry;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal_session;
