//! Turn signals and gear indicator
//!
//! Both arrows are always drawn. The selected side blinks; the other sits at the
//! inactive opacity.

use super::super::state::DashboardState;
use super::super::theme;
use super::super::utils::fade;
use crate::snapshot::TurnSignal;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const SIGNAL_WIDTH: u16 = 9;

/// Render the left indicator, gear and right indicator row.
pub fn render_signal_row(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIGNAL_WIDTH),
            Constraint::Fill(1),
            Constraint::Length(SIGNAL_WIDTH),
        ])
        .split(area);

    render_turn_signal(f, chunks[0], state, TurnSignal::Left);
    render_gear(f, chunks[1], state);
    render_turn_signal(f, chunks[2], state, TurnSignal::Right);
}

/// Color of an indicator at the current frame.
pub fn signal_color(state: &DashboardState, side: TurnSignal) -> Color {
    let opacity = state.blinker.opacity(side, state.frame_time);
    fade(theme::TURN_SIGNAL, theme::PANEL, opacity)
}

fn render_turn_signal(f: &mut Frame, area: Rect, state: &DashboardState, side: TurnSignal) {
    let arrow = match side {
        TurnSignal::Left => "◀",
        TurnSignal::Right => "▶",
    };
    let color = signal_color(state, side);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::PANEL))
        .style(Style::default().bg(theme::PANEL));

    let indicator = Paragraph::new(Line::from(arrow))
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(block);
    f.render_widget(indicator, centered_rows(area, 3));
}

fn render_gear(f: &mut Frame, area: Rect, state: &DashboardState) {
    let view = &state.view;
    let gear = Paragraph::new(Line::from(view.gear.as_str()))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(view.gear_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title("Gear")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(view.gear_color)),
        );

    let width = area.width.min(15);
    let x = area.x + (area.width - width) / 2;
    f.render_widget(gear, centered_rows(Rect { x, width, ..area }, 3));
}

/// A `height`-row slice from the vertical middle of `area`.
fn centered_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}
