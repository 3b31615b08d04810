// src/engine/mod.rs

//! The accumulator loop.
//!
//! - [`accumulator`] owns the line buffer and the throttle decision.
//! - [`reader`] owns the read loop that drives a [`LaunchBackend`](crate::exec::LaunchBackend)
//!   with every flushed batch.

pub mod accumulator;
pub mod reader;

pub use accumulator::Accumulator;
pub use reader::{run_loop, LoopStats};
