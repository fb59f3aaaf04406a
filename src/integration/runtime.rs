use std::{collections::VecDeque, sync::Arc};

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        completion::CompletionHandler,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    infrastructure::tui::textarea_engine::TuiTextAreaEngine,
};

/// Rounds of translate/update/execute per cycle. Commands can post raw
/// messages back (e.g. the completion notification); a few rounds let
/// that feedback land in the same frame.
const MAX_ROUNDS_PER_CYCLE: usize = 4;

/// Drives the Elm loop: queues raw and domain messages, runs `update`, and
/// hands the produced commands to the executor.
pub struct Runtime {
    ctx: UpdateContext<'static>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime without a command executor
    pub fn new(initial_state: AppState) -> Self {
        static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            ctx: UpdateContext { text_area: &ENGINE },
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new Runtime whose executor delivers submissions to `handler`
    pub fn new_with_completion(initial_state: AppState, handler: Arc<dyn CompletionHandler>) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::with_completion(handler));
        runtime
    }

    /// Set a command executor with no sinks attached
    pub fn set_executor(&mut self) {
        self.cmd_executor = Some(CmdExecutor::new());
    }

    fn executor_mut(&mut self) -> Result<&mut CmdExecutor> {
        self.cmd_executor
            .as_mut()
            .ok_or_else(|| eyre!("No executor available. Use set_executor() first."))
    }

    pub fn set_completion_handler(&mut self, handler: Arc<dyn CompletionHandler>) -> Result<()> {
        self.executor_mut()?.set_completion_handler(handler);
        Ok(())
    }

    /// Add TUI command sender support to existing executor (for TuiCommand execution)
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) -> Result<()> {
        self.executor_mut()?.set_tui_sender(tui_sender);
        Ok(())
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(
        &mut self,
        render_sender: mpsc::UnboundedSender<()>,
    ) -> Result<()> {
        self.executor_mut()?.set_render_request_sender(render_sender);
        Ok(())
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Raw message sender for handlers running outside the loop
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>> {
        let Some(executor) = &self.cmd_executor else {
            return Err(eyre!(
                "No command executor available. Use set_executor() to configure."
            ));
        };
        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        if commands.is_empty() {
            return Ok(vec![]);
        }
        executor.execute_commands(&commands)
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("update: {msg:?}");
        }
        let (new_state, commands) = update_with_context(msg, self.state.clone(), &self.ctx);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    fn translate(&mut self, raw_msg: RawMsg) {
        let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
        self.msg_queue.extend(domain_msgs);
    }

    /// Process all queued messages. Raw messages are translated one at a
    /// time against the state left by the previous one, so a key that
    /// opens a form changes how the next key is read.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        loop {
            while let Some(msg) = self.msg_queue.pop_front() {
                all_commands.extend(self.process_message(msg));
            }

            let next_raw = match self.raw_msg_queue.pop_front() {
                Some(raw_msg) => Some(raw_msg),
                None => self.raw_msg_rx.try_recv().ok(),
            };
            match next_raw {
                Some(raw_msg) => self.translate(raw_msg),
                None => break,
            }
        }

        all_commands
    }

    /// Process all messages and execute commands, repeating while command
    /// feedback keeps arriving. A render is requested whenever any
    /// message changed the state.
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>> {
        let mut executed = Vec::new();

        for _ in 0..MAX_ROUNDS_PER_CYCLE {
            if !self.has_pending_input() {
                break;
            }
            self.process_all_messages();
            self.cmd_queue.push_back(Cmd::RequestRender);
            executed.extend(self.execute_pending_commands()?);
        }

        Ok(executed)
    }

    fn has_pending_input(&self) -> bool {
        !self.msg_queue.is_empty() || !self.raw_msg_queue.is_empty() || !self.raw_msg_rx.is_empty()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            mode: self.state.mode.kind().map(|kind| kind.to_string()),
            has_executor: self.cmd_executor.is_some(),
            has_completion_handler: self
                .cmd_executor
                .as_ref()
                .is_some_and(|executor| executor.get_stats().has_completion_handler),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub mode: Option<String>,
    pub has_executor: bool,
    pub has_completion_handler: bool,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            completion::RecordingHandler,
            msg::{form::FormMsg, mode::ModeMsg, system::SystemMsg},
        },
        domain::form::FormKind,
        infrastructure::{completion::NotifyingHandler, config::Config},
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default()
    }

    fn create_test_state() -> Result<AppState> {
        Ok(AppState::new_with_config(today(), Config::defaults()?))
    }

    fn key(c: char) -> RawMsg {
        RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_runtime_creation() -> Result<()> {
        let runtime = Runtime::new(create_test_state()?);
        let stats = runtime.get_stats();

        assert_eq!(stats.queued_messages, 0);
        assert_eq!(stats.queued_commands, 0);
        assert_eq!(stats.mode, None);
        assert!(!stats.has_executor);
        Ok(())
    }

    #[test]
    fn test_process_message() -> Result<()> {
        let mut runtime = Runtime::new(create_test_state()?);

        let commands = runtime.process_message(Msg::System(SystemMsg::Quit));
        assert!(commands.is_empty());
        assert!(runtime.state().system.should_quit);
        Ok(())
    }

    #[test]
    fn test_mode_key_then_typing_in_one_batch() -> Result<()> {
        let mut runtime = Runtime::new(create_test_state()?);

        // "a" opens the form; the following "a" is typed into the rack
        runtime.send_raw_msg(key('a'));
        runtime.send_raw_msg(key('a'));
        runtime.process_all_messages();

        let form = runtime.state().form().expect("form mounted");
        assert_eq!(form.kind(), FormKind::Add);
        assert_eq!(form.draft().rack, "a");
        Ok(())
    }

    #[test]
    fn test_completion_notification_lands_in_same_cycle() -> Result<()> {
        let mut runtime = Runtime::new(create_test_state()?);
        runtime.set_executor();
        let handler = NotifyingHandler::new(runtime.get_raw_sender());
        runtime.set_completion_handler(Arc::new(handler))?;

        runtime.send_raw_msg(key('e'));
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        let executed = runtime.run_update_cycle()?;

        assert!(executed.iter().any(|name| name == "Complete"));
        assert_eq!(runtime.state().form(), None);
        assert_eq!(
            runtime.state().system.status_message().map(String::as_str),
            Some(r#"Edit {"rack":"Garage","country":"New Zealand","consume":"2024-06-01"}"#)
        );
        Ok(())
    }

    #[test]
    fn test_run_update_cycle_requests_render() -> Result<()> {
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        let mut runtime = Runtime::new(create_test_state()?);
        runtime.set_executor();
        runtime.add_render_request_sender(render_tx)?;

        runtime.send_msg(Msg::Mode(ModeMsg::EnterAdd));
        runtime.run_update_cycle()?;
        assert!(render_rx.try_recv().is_ok());

        // nothing queued, nothing to draw
        let executed = runtime.run_update_cycle()?;
        assert!(executed.is_empty());
        assert!(render_rx.try_recv().is_err());
        Ok(())
    }

    #[test]
    fn test_recording_handler_receives_submission() -> Result<()> {
        let handler = RecordingHandler::new();
        let mut runtime =
            Runtime::new_with_completion(create_test_state()?, Arc::new(handler.clone()));

        runtime.send_msg(Msg::Mode(ModeMsg::EnterEdit(
            crate::domain::form::FormValues::example(today()),
        )));
        runtime.send_msg(Msg::Form(FormMsg::Submit));
        runtime.run_update_cycle()?;

        assert_eq!(handler.len(), 1);
        assert_eq!(handler.submissions()[0].kind, FormKind::Edit);
        Ok(())
    }

    #[test]
    fn test_executor_required_for_execution() -> Result<()> {
        let mut runtime = Runtime::new(create_test_state()?);
        let (tx, _rx) = mpsc::unbounded_channel();
        assert!(runtime.add_tui_sender(tx).is_err());
        assert!(runtime.execute_pending_commands().is_err());
        Ok(())
    }
}
