use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    completion::CompletionHandler,
};

/// Command executor that bridges Elm commands to the completion handler and the TUI host
#[derive(Clone, Default)]
pub struct CmdExecutor {
    completion: Option<Arc<dyn CompletionHandler>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    /// Create a new command executor with no sinks attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new command executor that delivers submissions to `handler`
    pub fn with_completion(handler: Arc<dyn CompletionHandler>) -> Self {
        Self {
            completion: Some(handler),
            ..Default::default()
        }
    }

    pub fn set_completion_handler(&mut self, handler: Arc<dyn CompletionHandler>) {
        self.completion = Some(handler);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::Complete(submission) => {
                if let Some(handler) = &self.completion {
                    handler.complete(submission)?;
                } else {
                    log::warn!(
                        "Complete ignored: no completion handler ({} submission for rack '{}')",
                        submission.kind,
                        submission.values.rack
                    );
                }
            }

            Cmd::Tui(tui_cmd) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(tui_cmd.clone())?;
                } else {
                    // No TUI sender configured: drop with warning
                    log::warn!("CmdExecutor: TUI sender not configured; dropping {tui_cmd:?}");
                }
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    // The receiver may already be gone during shutdown
                    let _ = rtx.send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("Elm command error: {message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("Elm command info: {message}");
            }
        }

        Ok(())
    }

    /// Execute commands in priority order (stable within a priority),
    /// returning the names of the executed commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut ordered: Vec<&Cmd> = commands.iter().collect();
        ordered.sort_by_key(|cmd| cmd.priority());

        let mut executed = Vec::with_capacity(ordered.len());
        for cmd in ordered {
            self.execute_command(cmd)?;
            executed.push(cmd.name().to_string());
        }
        Ok(executed)
    }

    pub fn get_stats(&self) -> ExecutorStats {
        ExecutorStats {
            has_completion_handler: self.completion.is_some(),
            has_tui_sender: self.tui_sender.is_some(),
            has_render_req_sender: self.render_req_sender.is_some(),
        }
    }
}

/// Which sinks an executor is wired to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorStats {
    pub has_completion_handler: bool,
    pub has_tui_sender: bool,
    pub has_render_req_sender: bool,
}
