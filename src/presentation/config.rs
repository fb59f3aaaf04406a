//! UI configuration
//!
//! Key bindings for the idle screen and named styles for the form.

pub mod keybindings;
pub mod styles;

// Re-export for convenience
pub use keybindings::{Action, KeyBindings};
pub use styles::Styles;
