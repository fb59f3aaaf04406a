use std::sync::Arc;

use chrono::Local;
use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        completion::CompletionHandler,
        msg::{mode::ModeMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::form::FormValues,
    infrastructure::{
        cli::StartMode,
        completion::NotifyingHandler,
        config::Config,
        tui::{Event, TuiLike},
    },
    integration::{coalescer::FrameCoalescer, renderer::Renderer, runtime::Runtime},
};

/// Drives the Elm runtime from terminal events and renders the state.
/// The terminal is injected so tests can run against `TestTui`.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_rx: mpsc::UnboundedReceiver<()>,
    coalescer: FrameCoalescer,
    renderer: Renderer,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Create a runner for the given terminal. Without a `handler`,
    /// submissions go to a `NotifyingHandler` that reports back into the loop.
    pub fn new_with_tui(
        initial_state: AppState,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        handler: Option<Arc<dyn CompletionHandler>>,
    ) -> Result<Self> {
        let mut runtime = Runtime::new(initial_state);
        runtime.set_executor();

        let handler = handler
            .unwrap_or_else(|| Arc::new(NotifyingHandler::new(runtime.get_raw_sender())));
        runtime.set_completion_handler(handler)?;

        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx)?;
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        runtime.add_render_request_sender(render_tx)?;

        Ok(Self {
            runtime,
            tui,
            tui_rx,
            render_rx,
            coalescer: FrameCoalescer::new(),
            renderer: Renderer::new(),
        })
    }

    /// Create the production runner. "Today" is captured here, once per session.
    pub fn new_with_config(
        config: Config,
        tui: impl TuiLike + Send + 'static,
        start: Option<StartMode>,
    ) -> Result<Self> {
        let today = Local::now().date_naive();
        let initial_state = AppState::new_with_config(today, config);
        let tui: Arc<Mutex<dyn TuiLike + Send>> = Arc::new(Mutex::new(tui));

        let mut runner = Self::new_with_tui(initial_state, tui, None)?;
        runner.start_in(start);
        Ok(runner)
    }

    /// Queue the mode switch for `--start`
    pub fn start_in(&mut self, start: Option<StartMode>) {
        let msg = match start {
            Some(StartMode::Add) => ModeMsg::EnterAdd,
            Some(StartMode::Edit) => {
                ModeMsg::EnterEdit(FormValues::example(self.runtime.state().today))
            }
            None => return,
        };
        log::info!("Starting in {start:?} mode");
        self.runtime.send_msg(Msg::Mode(msg));
    }

    /// Run the main loop until the state asks to quit or the event source ends
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.coalescer.request_render();

        let result = self.run_loop().await;

        self.tui.lock().await.exit()?;
        result
    }

    async fn run_loop(&mut self) -> Result<()> {
        loop {
            self.run_one_cycle().await?;
            if self.runtime.state().system.should_quit {
                break;
            }

            let event = self.tui.lock().await.next().await;
            self.forward_event(event);
        }
        Ok(())
    }

    fn forward_event(&mut self, event: Option<Event>) {
        let raw_msg = match event {
            None | Some(Event::Closed) | Some(Event::Quit) => RawMsg::Quit,
            Some(Event::Init) | Some(Event::Render) => {
                self.coalescer.request_render();
                return;
            }
            Some(Event::Tick) => RawMsg::Tick,
            Some(Event::Error) => RawMsg::Error("Terminal event error".to_owned()),
            Some(Event::Key(key)) => RawMsg::Key(key),
            Some(Event::Paste(text)) => RawMsg::Paste(text),
            Some(Event::Resize(width, height)) => RawMsg::Resize(width, height),
        };
        self.runtime.send_raw_msg(raw_msg);
    }

    /// One iteration after an event: update, host commands, then at most
    /// one resize and one draw.
    pub async fn run_one_cycle(&mut self) -> Result<()> {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime.send_raw_msg(RawMsg::Error(e.to_string()));
            self.coalescer.request_render();
        }

        while let Ok(cmd) = self.tui_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => self.coalescer.note_resize(width, height),
                TuiCommand::Suspend => {
                    {
                        let mut tui = self.tui.lock().await;
                        tui.suspend()?;
                        tui.resume()?;
                    }
                    self.runtime.send_raw_msg(RawMsg::Resume);
                    self.coalescer.request_render();
                }
            }
        }

        while self.render_rx.try_recv().is_ok() {
            self.coalescer.request_render();
        }

        if let Some((width, height)) = self.coalescer.take_resize() {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
        }
        if self.coalescer.take_render() {
            self.renderer.render(&self.tui, self.runtime.state()).await?;
        }
        Ok(())
    }
}
