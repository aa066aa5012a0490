//! Bottom status row
//!
//! Renders range, drive mode and the combined fault banner

use super::super::state::DashboardState;
use super::super::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the bottom row.
pub fn render_bottom_row(f: &mut Frame, area: Rect, state: &DashboardState) {
    let view = &state.view;

    let block = Block::default()
        .borders(Borders::TOP)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(theme::PANEL));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(inner);

    let fault_color = if view.fault_detected {
        theme::FAULT
    } else {
        theme::OK
    };

    render_stat(f, cells[0], "Range", &view.range, theme::TEXT);
    render_stat(f, cells[1], "Mode", &view.mode, view.mode_color);
    render_stat(f, cells[2], "Faults", &view.faults, fault_color);
}

fn render_stat(f: &mut Frame, area: Rect, label: &str, value: &str, color: Color) {
    let lines = vec![
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(theme::TEXT_LABEL),
        )),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
