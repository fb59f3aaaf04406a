//! Infrastructure layer
//!
//! This module handles the outside world:
//! - TUI foundation (real crossterm terminal and a TestBackend double)
//! - CLI argument processing
//! - Configuration loading
//! - The default completion handler

pub mod cli;
pub mod completion;
pub mod config;
pub mod tui;
