//! Dashboard footer component
//!
//! Renders footer with quit instructions and the latest feed message

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, get_level_color};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut spans = vec![Span::styled(
        "[Q] Quit | Vehicle Dashboard",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    let (feed_label, feed_color) = if state.feed_finished {
        ("ended", Color::Yellow)
    } else {
        ("live", Color::Green)
    };
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("Feed {} ({} snapshots)", feed_label, state.snapshots_received),
        Style::default().fg(feed_color),
    ));

    if let Some(event) = state.latest_message() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} ", format_compact_timestamp(&event.timestamp)),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            event.msg.clone(),
            Style::default().fg(get_level_color(event.log_level)),
        ));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
