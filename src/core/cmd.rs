use serde::{Deserialize, Serialize};

use crate::domain::form::Submission;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
    Suspend,
}

/// Elm-like command definitions
/// Represents side effects the pure update path asks the host to perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Hand a validated record to the completion handler
    Complete(Submission),

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via render request sender and coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError { message: String },
    LogInfo { message: String },
}

impl Cmd {
    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // UI-related has highest priority
            Cmd::Tui(..) | Cmd::RequestRender => 0,

            // The user's submission comes next
            Cmd::Complete(..) => 1,

            // Logging is lowest
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 2,
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::Complete(..) => "Complete",
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui::Resize",
            Cmd::Tui(TuiCommand::Suspend) => "Tui::Suspend",
            Cmd::RequestRender => "RequestRender",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
        }
    }
}
