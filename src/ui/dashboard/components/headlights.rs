//! Headlight row component

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Render the four headlight lamps, each lit or dimmed on its own flag.
pub fn render_headlights(f: &mut Frame, area: Rect, state: &DashboardState) {
    let lamps = &state.view.headlights;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, lamps.len() as u32); 4])
        .split(area);

    for (cell, lamp) in cells.iter().zip(lamps) {
        let lines = vec![
            Line::from(Span::styled(lamp.icon, Style::default().fg(lamp.icon_color()))),
            Line::from(Span::styled(lamp.label, Style::default().fg(lamp.text_color()))),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), *cell);
    }
}
