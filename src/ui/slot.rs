//! Slot machine session

use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;
use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tracing::{debug, info};

use super::events::Action;
use super::render::{
    CellStyle, ScreenAreas, cell, centered_text, draw_grid, footer, grid_size, panel, panel_size,
};
use super::session::{Flow, Session};
use crate::animation::{ReelEvent, SlotSpin, SpinTiming};
use crate::constants::animation::CELEBRATION_EMOJIS;
use crate::core::{SlotOutcome, SlotVerdict, is_special_participant};
use crate::error::RogvibeError;
use crate::participants::CommandProbe;
use crate::selector::SlotSelector;

pub const IDLE_HINT: &str = "Press Space to pull the lever; press q to quit.";
const REEL_WIDTH: u16 = 9;
const REEL_GAP: u16 = 1;
const BLANK_REEL: &str = "?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotStatus {
    Idle,
    Spinning,
    Finished(SlotOutcome),
    Failed(String),
}

pub struct SlotSession<R> {
    selector: SlotSelector,
    probe: Box<dyn CommandProbe>,
    timing: SpinTiming,
    rng: R,
    display: Vec<String>,
    spin: Option<SlotSpin>,
    status: SlotStatus,
    celebration: &'static str,
}

impl<R: Rng> SlotSession<R> {
    /// `probe` decides whether a jackpot symbol is a command worth launching
    pub fn new(
        selector: SlotSelector,
        probe: Box<dyn CommandProbe>,
        timing: SpinTiming,
        rng: R,
    ) -> Self {
        let display = vec![BLANK_REEL.to_string(); selector.reels()];
        Self {
            selector,
            probe,
            timing,
            rng,
            display,
            spin: None,
            status: SlotStatus::Idle,
            celebration: CELEBRATION_EMOJIS[0],
        }
    }

    pub fn display(&self) -> &[String] {
        &self.display
    }

    pub fn status(&self) -> &SlotStatus {
        &self.status
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// Jackpot symbol that Enter would launch
    pub fn runnable_symbol(&self) -> Option<&str> {
        let SlotStatus::Finished(outcome) = &self.status else {
            return None;
        };
        if !matches!(outcome.verdict(), SlotVerdict::Jackpot(_)) {
            return None;
        }

        let symbol = outcome.reels.first().map(String::as_str)?;
        if is_special_participant(symbol) || !self.probe.is_available(symbol) {
            return None;
        }
        Some(symbol)
    }

    fn pull(&mut self) {
        if self.spin.is_some() {
            return;
        }

        match self.selector.draw(&mut self.rng) {
            Ok(outcome) => {
                debug!(%outcome, "lever pulled");
                self.spin = Some(SlotSpin::start(outcome, self.display.clone(), self.timing));
                self.status = SlotStatus::Spinning;
            }
            Err(err) => self.status = SlotStatus::Failed(RogvibeError::from(err).to_string()),
        }
    }

    fn status_lines(&self) -> Vec<Line<'static>> {
        let win = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
        match &self.status {
            SlotStatus::Idle => vec![Line::default()],
            SlotStatus::Spinning => vec![Line::from("🎰 Spinning...")],
            SlotStatus::Finished(outcome) => match outcome.verdict() {
                SlotVerdict::GrandJackpot => vec![Line::styled(
                    format!(
                        "{0} {1} Grand jackpot! {1} {0}",
                        self.celebration,
                        outcome.reels.concat()
                    ),
                    win.fg(Color::Yellow),
                )],
                SlotVerdict::Jackpot(symbol) => {
                    let hint = if self.runnable_symbol().is_some() {
                        format!("↩️  Press Enter to run {symbol}, or Space to pull again.")
                    } else {
                        "Press Space to pull again, or q to quit.".to_string()
                    };
                    vec![
                        Line::styled(format!("{} Jackpot: {symbol}", self.celebration), win),
                        Line::from(hint),
                    ]
                }
                SlotVerdict::NoMatch => {
                    vec![Line::from("No match this time. Press Space to pull again.")]
                }
            },
            SlotStatus::Failed(message) => vec![Line::styled(
                format!("⚠️ {message}"),
                Style::default().fg(Color::Red),
            )],
        }
    }

    fn reel_cells(&self) -> Vec<Paragraph<'static>> {
        let settled = matches!(self.status, SlotStatus::Finished(_));
        self.display
            .iter()
            .enumerate()
            .map(|(reel, symbol)| {
                let stopped = self
                    .spin
                    .as_ref()
                    .is_none_or(|spin| spin.is_reel_stopped(reel));
                let style = if stopped && settled {
                    CellStyle::Highlight
                } else {
                    CellStyle::Normal
                };
                cell(symbol, REEL_WIDTH, style)
            })
            .collect()
    }
}

impl<R: Rng> Session for SlotSession<R> {
    fn on_action(&mut self, action: Action) -> Flow {
        match action {
            Action::Spin => {
                self.pull();
                Flow::Continue
            }
            Action::Execute => match self.runnable_symbol() {
                Some(symbol) => Flow::Launch(symbol.to_string()),
                None => Flow::Continue,
            },
            Action::Quit => Flow::Quit,
        }
    }

    fn on_tick(&mut self) {
        let Some(spin) = self.spin.as_mut() else {
            return;
        };

        let events = spin.advance(self.selector.symbols(), &mut self.rng);
        self.display = spin.display().to_vec();

        for event in events {
            if let ReelEvent::AllStopped { outcome } = event {
                info!(%outcome, "reels stopped");
                self.celebration = CELEBRATION_EMOJIS
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(CELEBRATION_EMOJIS[0]);
                self.spin = None;
                self.status = SlotStatus::Finished(outcome);
            }
        }
    }

    fn next_tick(&self) -> Option<Duration> {
        self.spin.as_ref().map(SlotSpin::next_delay)
    }

    fn render(&self, frame: &mut Frame) {
        let grid = grid_size(1, self.display.len() as u16, REEL_WIDTH, REEL_GAP);
        let status = self.status_lines();
        let areas = ScreenAreas::split(frame.area(), panel_size(grid), false, status.len() as u16);

        frame.render_widget(centered_text(IDLE_HINT), areas.hint);

        let block = panel("Rogvibe 777");
        let inner = block.inner(areas.panel);
        frame.render_widget(block, areas.panel);
        draw_grid(frame, inner, vec![self.reel_cells()], REEL_WIDTH, REEL_GAP);

        frame.render_widget(centered_text(status), areas.status);
        frame.render_widget(footer("Space Pull   Enter Run   q Quit"), areas.footer);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::core::SymbolSet;
    use crate::ui::render::render_to_text;

    struct Installed(Vec<&'static str>);

    impl CommandProbe for Installed {
        fn locate(&self, command: &str) -> Option<PathBuf> {
            self.0
                .iter()
                .any(|installed| *installed == command)
                .then(|| PathBuf::from("/usr/bin").join(command))
        }
    }

    fn session(symbols: &[&str], reels: usize, installed: Vec<&'static str>) -> SlotSession<StdRng> {
        SlotSession::new(
            SlotSelector::new(SymbolSet::new(symbols.iter().copied()), reels),
            Box::new(Installed(installed)),
            SpinTiming::default(),
            StdRng::seed_from_u64(11),
        )
    }

    fn pull_to_end(session: &mut SlotSession<StdRng>) {
        session.on_action(Action::Spin);
        let mut ticks = 0;
        while session.next_tick().is_some() {
            session.on_tick();
            ticks += 1;
            assert!(ticks < 1_000, "reels never stopped");
        }
    }

    fn screen(session: &SlotSession<StdRng>) -> String {
        render_to_text(session, 80, 24).unwrap()
    }

    #[test]
    fn test_display_starts_blank() {
        let session = session(&["7", "🍒"], 3, vec![]);
        assert_eq!(session.display(), &["?", "?", "?"]);
        assert_eq!(session.status(), &SlotStatus::Idle);
    }

    #[test]
    fn test_pull_settles_on_drawn_outcome() {
        let mut session = session(&["7", "🍒", "🔔"], 3, vec![]);
        pull_to_end(&mut session);

        let SlotStatus::Finished(outcome) = session.status().clone() else {
            panic!("expected a result, got {:?}", session.status());
        };
        assert_eq!(session.display(), outcome.reels.as_slice());
        assert!(!session.is_spinning());
    }

    #[test]
    fn test_single_symbol_hits_grand_jackpot() {
        let mut session = session(&["7"], 3, vec![]);
        pull_to_end(&mut session);

        assert_eq!(
            session.status(),
            &SlotStatus::Finished(SlotOutcome::new(vec!["7".into(); 3]))
        );
        assert!(screen(&session).contains("777 Grand jackpot!"));
        assert_eq!(session.on_action(Action::Execute), Flow::Continue);
    }

    #[test]
    fn test_jackpot_on_installed_command_launches() {
        let mut session = session(&["claude"], 3, vec!["claude"]);
        pull_to_end(&mut session);

        assert_eq!(session.runnable_symbol(), Some("claude"));
        assert!(screen(&session).contains("Press Enter to run claude"));
        assert_eq!(
            session.on_action(Action::Execute),
            Flow::Launch("claude".to_string())
        );
    }

    #[test]
    fn test_jackpot_on_missing_command_does_not_launch() {
        let mut session = session(&["claude"], 2, vec![]);
        pull_to_end(&mut session);

        assert_eq!(session.runnable_symbol(), None);
        assert_eq!(session.on_action(Action::Execute), Flow::Continue);
    }

    #[test]
    fn test_empty_alphabet_reports_error() {
        let mut session = session(&[], 3, vec![]);
        session.on_action(Action::Spin);

        assert!(!session.is_spinning());
        assert!(matches!(session.status(), SlotStatus::Failed(_)));
    }

    #[test]
    fn test_quit() {
        let mut session = session(&["7"], 1, vec![]);
        assert_eq!(session.on_action(Action::Quit), Flow::Quit);
    }

    #[test]
    fn test_pull_uses_session_timing() {
        let timing = SpinTiming {
            base_delay: Duration::from_millis(5),
            max_extra_delay: Duration::from_millis(15),
        };
        let mut session = SlotSession::new(
            SlotSelector::new(SymbolSet::new(["7", "🍒"]), 2),
            Box::new(Installed(vec![])),
            timing,
            StdRng::seed_from_u64(11),
        );
        assert_eq!(session.next_tick(), None);

        session.on_action(Action::Spin);
        assert_eq!(session.next_tick(), Some(Duration::from_millis(5)));
        while let Some(delay) = session.next_tick() {
            assert!(delay <= Duration::from_millis(20));
            session.on_tick();
        }
    }

    #[test]
    fn test_render_shows_reels_and_hint() {
        let idle = screen(&session(&["7", "🍒"], 3, vec![]));
        assert!(idle.contains(IDLE_HINT));
        assert!(idle.contains("Rogvibe 777"));
        assert_eq!(idle.matches("│   ?   │").count(), 3);
    }
}
