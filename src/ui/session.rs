use std::time::Duration;

use ratatui::Frame;

use super::events::Action;

/// What the event loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
    /// Leave the display and run this winner
    Launch(String),
}

/// One interactive display: reacts to keys and timer ticks and draws
/// itself into a frame
///
/// Sessions never own the terminal, so any ratatui backend can render them.
pub trait Session {
    fn on_action(&mut self, action: Action) -> Flow;

    /// Advance the running animation by one step
    fn on_tick(&mut self);

    /// Delay until the next tick, `None` when idle
    fn next_tick(&self) -> Option<Duration>;

    fn render(&self, frame: &mut Frame);
}
