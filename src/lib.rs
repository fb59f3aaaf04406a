//! # Cellarform - validated cellar form in the terminal
//!
//! A small terminal form for cellar entries with an Add and an Edit mode,
//! built with Rust and Ratatui. The crate follows an Elm-like architecture
//! for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state, including the mounted form
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (completion, terminal control)
//! - **View** (`presentation::components`): rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use cellarform::core::{
//!     msg::{form::FormMsg, mode::ModeMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default();
//! let state = AppState::new(today);
//!
//! // Open the empty form and submit it right away
//! let (state, _) = update(Msg::Mode(ModeMsg::EnterAdd), state);
//! let (state, commands) = update(Msg::Form(FormMsg::Submit), state);
//!
//! // Rack and consume are mandatory, so nothing was completed
//! assert!(commands.iter().all(|cmd| cmd.name() != "Complete"));
//! assert!(state.form().is_some());
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Form values, countries, validation rules
//! - [`core`] - Elm architecture: state, messages, update, commands
//! - [`infrastructure`] - Terminal host, configuration, CLI, completion handler
//! - [`integration`] - Runtime and application runner
//! - [`presentation`] - Components, widgets, keybindings and styles

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
