//! Brake alert banner

use super::super::state::DashboardState;
use super::super::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

pub const BRAKE_TEXT: &str = " (!) BRAKE ";

/// Render the brake banner. Only the brake fault flag shows it.
pub fn render_brake_alert(f: &mut Frame, area: Rect, state: &DashboardState) {
    if !state.view.brake_alert {
        return;
    }
    let width = (BRAKE_TEXT.len() as u16).min(area.width);
    let banner_area = Rect {
        x: area.x + area.width - width,
        width,
        ..area
    };
    let banner = Paragraph::new(BRAKE_TEXT)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(theme::BRAKE_ALERT)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(banner, banner_area);
}
