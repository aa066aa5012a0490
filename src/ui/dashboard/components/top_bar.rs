//! Dashboard top bar component
//!
//! Renders the menu glyph, clock, connectivity banner and operating hours

use super::super::state::DashboardState;
use super::super::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Menu glyph. Decorative: nothing is bound to it.
const MENU_GLYPH: &str = "☰";

/// Render the top bar.
pub fn render_top_bar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let view = &state.view;

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(theme::PANEL));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    let text_style = Style::default()
        .fg(theme::TEXT)
        .add_modifier(Modifier::BOLD);

    f.render_widget(Paragraph::new(MENU_GLYPH).style(text_style), chunks[0]);
    f.render_widget(
        Paragraph::new(view.time.as_str())
            .alignment(Alignment::Left)
            .style(text_style),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(view.connection.as_str())
            .alignment(Alignment::Center)
            .style(text_style),
        chunks[2],
    );
    f.render_widget(
        Paragraph::new(view.hours.as_str())
            .alignment(Alignment::Right)
            .style(text_style),
        chunks[3],
    );
}
