//! Widgets and layout shared by the wheel and slot displays
//!
//! Sessions build their screen from these pieces on every frame; ratatui
//! diffs the result against the previous frame before writing anything.

use console::truncate_str;
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use super::session::Session;
use crate::error::RogvibeError;

pub const CELL_HEIGHT: u16 = 3;
const ROW_GAP: u16 = 1;
const PANEL_PADDING: u16 = 2;

/// How a wheel or reel cell is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Normal,
    Highlight,
    /// Placeholder for a slot with no participant
    Empty,
    /// No border, used for the dice in the middle of the wheel
    Bare,
}

/// A bordered cell `width` columns wide with `label` centred inside
pub fn cell(label: &str, width: u16, cell_style: CellStyle) -> Paragraph<'static> {
    let room = usize::from(width.saturating_sub(4));
    let label = truncate_str(label, room, "…").into_owned();

    let (border, text) = match cell_style {
        CellStyle::Normal => (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::White).bg(Color::Blue),
        ),
        CellStyle::Highlight => (
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        CellStyle::Empty => {
            return Paragraph::new("")
                .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
        }
        CellStyle::Bare => {
            return Paragraph::new(vec![Line::default(), Line::from(label)])
                .alignment(Alignment::Center);
        }
    };

    Paragraph::new(Line::styled(format!(" {label} "), text))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(border))
}

/// Columns and rows taken by a grid of cells
pub fn grid_size(rows: u16, columns: u16, width: u16, gap: u16) -> (u16, u16) {
    (
        columns * width + columns.saturating_sub(1) * gap,
        rows * CELL_HEIGHT + rows.saturating_sub(1) * ROW_GAP,
    )
}

/// Draw rows of equally wide cells, centred in `area`
pub fn draw_grid(
    frame: &mut Frame,
    area: Rect,
    rows: Vec<Vec<Paragraph<'_>>>,
    width: u16,
    gap: u16,
) {
    let row_areas = Layout::vertical(vec![Constraint::Length(CELL_HEIGHT); rows.len()])
        .spacing(ROW_GAP)
        .flex(Flex::Center)
        .split(area);

    for (row, row_area) in rows.into_iter().zip(row_areas.iter()) {
        let cell_areas = Layout::horizontal(vec![Constraint::Length(width); row.len()])
            .spacing(gap)
            .flex(Flex::Center)
            .split(*row_area);
        for (cell, cell_area) in row.into_iter().zip(cell_areas.iter()) {
            frame.render_widget(cell, *cell_area);
        }
    }
}

/// Rounded frame with `title` in the top border
pub fn panel(title: &str) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightCyan))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::horizontal(PANEL_PADDING))
}

/// Outer size of a [`panel`] around content of `size`
pub fn panel_size((width, height): (u16, u16)) -> (u16, u16) {
    (width + 2 + 2 * PANEL_PADDING, height + 2)
}

pub fn centered_text<'a>(text: impl Into<Text<'a>>) -> Paragraph<'a> {
    Paragraph::new(text).alignment(Alignment::Center)
}

pub fn footer(keys: &str) -> Paragraph<'_> {
    centered_text(keys).style(Style::default().add_modifier(Modifier::DIM))
}

/// Regions of a session screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub hint: Rect,
    pub warning: Option<Rect>,
    pub panel: Rect,
    pub status: Rect,
    pub footer: Rect,
}

impl ScreenAreas {
    /// Stack the screen vertically in the middle of `area`, with the panel
    /// centred at its outer `panel` size
    pub fn split(area: Rect, panel: (u16, u16), warning: bool, status_lines: u16) -> Self {
        let (panel_width, panel_height) = panel;
        let mut constraints = vec![Constraint::Length(1)];
        if warning {
            constraints.push(Constraint::Length(1));
        }
        constraints.extend([
            Constraint::Length(panel_height),
            Constraint::Length(status_lines),
            Constraint::Length(1),
        ]);

        let areas = Layout::vertical(constraints)
            .spacing(1)
            .flex(Flex::Center)
            .split(area);
        let offset = usize::from(warning);
        let [panel] = Layout::horizontal([Constraint::Length(panel_width)])
            .flex(Flex::Center)
            .areas(areas[1 + offset]);

        Self {
            hint: areas[0],
            warning: warning.then(|| areas[1]),
            panel,
            status: areas[2 + offset],
            footer: areas[3 + offset],
        }
    }
}

/// Render `session` off screen and return the text it shows, one line per
/// terminal row with trailing blanks removed
pub fn render_to_text<S: Session + ?Sized>(
    session: &S,
    width: u16,
    height: u16,
) -> Result<String, RogvibeError> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    let frame = terminal.draw(|frame| session.render(frame))?;
    Ok(buffer_text(frame.buffer))
}

fn buffer_text(buffer: &Buffer) -> String {
    let width = usize::from(buffer.area.width).max(1);
    buffer
        .content
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(Cell::symbol)
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
