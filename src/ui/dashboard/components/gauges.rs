//! Battery and speed gauges

use super::super::state::DashboardState;
use super::super::theme;
use super::super::view::GaugeView;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge};

/// Render the battery and speed gauges side by side.
pub fn render_gauges(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_gauge(f, chunks[0], &state.view.battery);
    render_gauge(f, chunks[1], &state.view.speed);
}

fn render_gauge(f: &mut Frame, area: Rect, gauge: &GaugeView) {
    let widget = Gauge::default()
        .block(
            Block::default()
                .title(gauge.title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(gauge.color)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge.color)
                .bg(theme::GAUGE_TRACK)
                .add_modifier(Modifier::BOLD),
        )
        .percent(gauge.fill)
        .label(gauge.label.as_str());

    f.render_widget(widget, area);
}
