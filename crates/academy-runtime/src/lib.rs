#![forbid(unsafe_code)]

//! Elm-style runtime: a [`Model`] receives messages, returns [`Cmd`]s, and
//! renders into a frame.
//!
//! [`Program`] drives a model against a real terminal;
//! [`simulator::ProgramSimulator`] drives the same model headlessly for
//! tests and for one-shot renders.

pub mod program;
pub mod simulator;

pub use program::{Cmd, Model, Program, ProgramConfig};
pub use simulator::ProgramSimulator;
