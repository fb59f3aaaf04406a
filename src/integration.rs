//! Integration layer
//!
//! Wires the pure core to the outside world:
//! - Runtime driving translate → update → execute
//! - Application runner owning the terminal loop
//! - Frame coalescing and rendering

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
