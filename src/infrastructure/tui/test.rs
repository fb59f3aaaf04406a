use std::{collections::VecDeque, future::Future, pin::Pin};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use futures::future;
use ratatui::{backend::TestBackend, buffer::Buffer, prelude::*};

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Test-oriented TUI implementation backed by ratatui::backend::TestBackend.
/// - enter/exit/suspend/resume only flip flags (no raw mode / alternate screen).
/// - next() returns events from an internal queue, `None` once it is drained.
/// - draw() increments an internal counter for assertions.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    entered: bool,
    suspends: usize,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            entered: false,
            suspends: 0,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    /// Expose draw count for tests.
    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn suspend_count(&self) -> usize {
        self.suspends
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Enqueue a single event for tests.
    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    /// Enqueue one key press per character of `text`.
    pub fn enqueue_text(&mut self, text: &str) {
        self.events.extend(
            text.chars()
                .map(|c| Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))),
        );
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Last drawn frame.
    pub fn buffer(&self) -> &Buffer {
        self.term.backend().buffer()
    }

    /// Last drawn frame as one string per row, trailing spaces trimmed.
    pub fn lines(&self) -> Vec<String> {
        let buffer = self.buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_owned()
            })
            .collect()
    }

    /// Whether any row of the last frame contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.entered = false;
        Ok(())
    }

    fn suspend(&mut self) -> Result<()> {
        self.suspends += 1;
        self.exit()
    }

    fn resume(&mut self) -> Result<()> {
        self.enter()
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        self.term.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        let ev = self.events.pop_front();
        Box::pin(future::ready(ev))
    }
}

#[cfg(test)]
mod tests {
    use ratatui::widgets::Paragraph;

    use super::*;

    #[tokio::test]
    async fn test_events_drain_in_order() -> Result<()> {
        let mut tui = TestTui::with_events(20, 4, [Event::Init, Event::Tick])?;
        tui.enqueue_text("ab");
        assert_eq!(tui.pending_events(), 4);
        assert_eq!(tui.next().await, Some(Event::Init));
        assert_eq!(tui.next().await, Some(Event::Tick));
        assert!(matches!(tui.next().await, Some(Event::Key(_))));
        assert!(matches!(tui.next().await, Some(Event::Key(_))));
        assert_eq!(tui.next().await, None);
        Ok(())
    }

    #[test]
    fn test_draw_counts_and_captures() -> Result<()> {
        let mut tui = TestTui::new(20, 2)?;
        tui.draw(&mut |f: &mut Frame<'_>| {
            f.render_widget(Paragraph::new("Cellar"), f.area())
        })?;
        assert_eq!(tui.draw_count(), 1);
        assert!(tui.contains("Cellar"));
        assert_eq!(tui.lines()[1], "");
        Ok(())
    }

    #[test]
    fn test_suspend_resume_flags() -> Result<()> {
        let mut tui = TestTui::new(10, 2)?;
        tui.enter()?;
        tui.suspend()?;
        assert!(!tui.is_entered());
        tui.resume()?;
        assert!(tui.is_entered());
        assert_eq!(tui.suspend_count(), 1);
        Ok(())
    }
}
