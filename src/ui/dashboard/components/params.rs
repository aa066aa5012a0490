//! Parameter grid component
//!
//! Renders battery/coolant temperatures and motor/hydraulic RPM in a 2x2 grid

use super::super::state::DashboardState;
use super::super::theme;
use super::super::view::ParamView;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the parameter grid.
pub fn render_param_grid(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    for (row, params) in rows.iter().zip(state.view.params.chunks(2)) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        for (cell, param) in cells.iter().zip(params) {
            render_param(f, *cell, param);
        }
    }
}

fn render_param(f: &mut Frame, area: Rect, param: &ParamView) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", param.icon),
                Style::default().fg(param.icon_color),
            ),
            Span::styled(
                param.label,
                Style::default()
                    .fg(theme::TEXT_MUTED)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            param.value.as_str(),
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::PANEL));

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
