//! Lottery wheel session
//!
//! Participants sit clockwise around a 2x2 or 3x3 grid. A spin draws the
//! winner first, then walks the highlight around the grid until it rests on
//! the drawn slot.

use std::time::Duration;

use rand::Rng;
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
use crate::animation::{SpinTiming, WheelEvent, WheelSpin};
use crate::constants::animation::{DICE_EMOJI, TARGET_EMOJI};
use crate::constants::participants::{LARGE_WHEEL_CAPACITY, SMALL_WHEEL_CAPACITY};
use crate::core::{ParticipantList, is_special_participant};
use crate::error::RogvibeError;
use crate::selector::Selector;

pub const IDLE_HINT: &str = "Press Space to spin; press Enter to run the viber; press q to quit.";
const CELL_GAP: u16 = 2;

/// One position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Participant slot, numbered clockwise from the top left
    Slot(usize),
    Center,
}

/// Grid shape chosen from the number of participants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelLayout {
    Small,
    Large,
}

impl WheelLayout {
    pub fn for_count(count: usize) -> Self {
        if count <= SMALL_WHEEL_CAPACITY {
            WheelLayout::Small
        } else {
            WheelLayout::Large
        }
    }

    pub fn capacity(self) -> usize {
        match self {
            WheelLayout::Small => SMALL_WHEEL_CAPACITY,
            WheelLayout::Large => LARGE_WHEEL_CAPACITY,
        }
    }

    pub fn cell_width(self) -> u16 {
        match self {
            WheelLayout::Small => 12,
            WheelLayout::Large => 14,
        }
    }

    /// Rows of the grid, slots numbered clockwise
    pub fn rows(self) -> Vec<Vec<GridCell>> {
        use GridCell::{Center, Slot};
        match self {
            WheelLayout::Small => vec![vec![Slot(0), Slot(1)], vec![Slot(3), Slot(2)]],
            WheelLayout::Large => vec![
                vec![Slot(0), Slot(1), Slot(2)],
                vec![Slot(7), Center, Slot(3)],
                vec![Slot(6), Slot(5), Slot(4)],
            ],
        }
    }
}

/// What the status line currently says
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WheelStatus {
    Idle,
    Spinning,
    Won(String),
    Failed(String),
}

pub struct WheelSession<R> {
    layout: WheelLayout,
    selector: Selector,
    ignored: usize,
    timing: SpinTiming,
    rng: R,
    current: usize,
    dice: &'static str,
    spin: Option<WheelSpin>,
    status: WheelStatus,
}

impl<R: Rng> WheelSession<R> {
    /// Participants past the grid capacity are dropped and reported in the
    /// display
    pub fn new(participants: ParticipantList, timing: SpinTiming, rng: R) -> Self {
        let layout = WheelLayout::for_count(participants.len());
        let (visible, ignored) = participants.truncated(layout.capacity());
        if ignored > 0 {
            debug!(ignored, capacity = layout.capacity(), "participants truncated");
        }

        Self {
            layout,
            selector: Selector::new(visible),
            ignored,
            timing,
            rng,
            current: 0,
            dice: TARGET_EMOJI,
            spin: None,
            status: WheelStatus::Idle,
        }
    }

    pub fn layout(&self) -> WheelLayout {
        self.layout
    }

    pub fn participants(&self) -> &ParticipantList {
        self.selector.participants()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn status(&self) -> &WheelStatus {
        &self.status
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// Winner that Enter would launch
    pub fn runnable_winner(&self) -> Option<&str> {
        match &self.status {
            WheelStatus::Won(winner) if !is_special_participant(winner) => Some(winner.as_str()),
            _ => None,
        }
    }

    fn start_spin(&mut self) {
        if self.spin.is_some() {
            return;
        }

        match self.selector.draw_index(&mut self.rng) {
            Ok(target) => {
                let spin = WheelSpin::start(
                    self.current,
                    target,
                    self.participants().len(),
                    self.timing,
                    &mut self.rng,
                );
                debug!(target, steps = spin.total_steps(), "spin started");
                self.spin = Some(spin);
                self.dice = DICE_EMOJI;
                self.status = WheelStatus::Spinning;
            }
            Err(err) => self.status = WheelStatus::Failed(RogvibeError::from(err).to_string()),
        }
    }

    fn status_lines(&self) -> Vec<Line<'static>> {
        match &self.status {
            WheelStatus::Idle => vec![Line::default()],
            WheelStatus::Spinning => vec![Line::from(format!("{} Spinning...", self.dice))],
            WheelStatus::Won(winner) => {
                let hint = if is_special_participant(winner) {
                    "🍀 Lucky winner! Press Space to spin again, or q to quit."
                } else {
                    "↩️  Press Enter to run and exit, or q to quit."
                };
                vec![
                    Line::styled(
                        format!("🎉 viber: {winner}"),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Line::from(hint),
                ]
            }
            WheelStatus::Failed(message) => vec![Line::styled(
                format!("⚠️ {message}"),
                Style::default().fg(Color::Red),
            )],
        }
    }

    fn grid_cells(&self) -> Vec<Vec<Paragraph<'static>>> {
        let width = self.layout.cell_width();
        self.layout
            .rows()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|grid_cell| match grid_cell {
                        GridCell::Center => cell(self.dice, width, CellStyle::Bare),
                        GridCell::Slot(slot) => match self.participants().get(slot) {
                            Some(name) if slot == self.current => {
                                cell(name, width, CellStyle::Highlight)
                            }
                            Some(name) => cell(name, width, CellStyle::Normal),
                            None => cell("", width, CellStyle::Empty),
                        },
                    })
                    .collect()
            })
            .collect()
    }
}

impl<R: Rng> Session for WheelSession<R> {
    fn on_action(&mut self, action: Action) -> Flow {
        match action {
            Action::Spin => {
                self.start_spin();
                Flow::Continue
            }
            Action::Execute => match self.runnable_winner() {
                Some(winner) if !self.is_spinning() => Flow::Launch(winner.to_string()),
                _ => Flow::Continue,
            },
            Action::Quit => Flow::Quit,
        }
    }

    fn on_tick(&mut self) {
        let Some(spin) = self.spin.as_mut() else {
            return;
        };

        match spin.advance(&mut self.rng) {
            WheelEvent::Tick { index, dice_face } => {
                self.current = index;
                self.dice = dice_face;
            }
            WheelEvent::Finished { index } => {
                self.current = index;
                self.dice = TARGET_EMOJI;
                self.spin = None;
                let winner = self
                    .participants()
                    .get(index)
                    .unwrap_or_default()
                    .to_string();
                info!(winner = %winner, "spin finished");
                self.status = WheelStatus::Won(winner);
            }
        }
    }

    fn next_tick(&self) -> Option<Duration> {
        self.spin.as_ref().map(WheelSpin::next_delay)
    }

    fn render(&self, frame: &mut Frame) {
        let rows = self.layout.rows();
        let columns = rows.first().map_or(0, Vec::len) as u16;
        let width = self.layout.cell_width();
        let grid = grid_size(rows.len() as u16, columns, width, CELL_GAP);
        let status = self.status_lines();
        let areas = ScreenAreas::split(
            frame.area(),
            panel_size(grid),
            self.ignored > 0,
            status.len() as u16,
        );

        frame.render_widget(centered_text(IDLE_HINT), areas.hint);
        if let Some(area) = areas.warning {
            let warning = format!(
                "⚠️ Showing only the first {} names; the remaining {} are ignored.",
                self.layout.capacity(),
                self.ignored
            );
            frame.render_widget(
                centered_text(Line::styled(warning, Style::default().fg(Color::Yellow))),
                area,
            );
        }

        let block = panel("Rogvibe");
        let inner = block.inner(areas.panel);
        frame.render_widget(block, areas.panel);
        draw_grid(frame, inner, self.grid_cells(), width, CELL_GAP);

        frame.render_widget(centered_text(status), areas.status);
        frame.render_widget(footer("Space Spin   Enter Run   q Quit"), areas.footer);
    }
}
