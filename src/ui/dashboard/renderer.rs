//! Dashboard main renderer

use super::components::{
    bottom_row, brake, footer, gauges, headlights, params, signals, top_bar,
};
use super::state::DashboardState;
use super::theme;
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::Style;
use ratatui::widgets::Block;
use unicode_width::UnicodeWidthStr;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(theme::BACKGROUND)),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // top bar
            Constraint::Length(5), // turn signals + gear
            Constraint::Length(6), // parameter grid
            Constraint::Length(3), // headlights
            Constraint::Min(3),    // gauges
            Constraint::Length(1), // brake alert
            Constraint::Length(3), // bottom row
            Constraint::Length(2), // footer
        ])
        .margin(1)
        .split(f.area());

    top_bar::render_top_bar(f, main_chunks[0], state);
    signals::render_signal_row(f, main_chunks[1], state);
    params::render_param_grid(f, main_chunks[2], state);
    headlights::render_headlights(f, main_chunks[3], state);
    gauges::render_gauges(f, main_chunks[4], state);
    brake::render_brake_alert(f, main_chunks[5], state);
    bottom_row::render_bottom_row(f, main_chunks[6], state);
    footer::render_footer(f, main_chunks[7], state);
}

/// Draw one frame off-screen and return the resulting buffer.
pub fn render_to_buffer(
    state: &DashboardState,
    width: u16,
    height: u16,
) -> std::io::Result<Buffer> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| render_dashboard(f, state))?;
    Ok(terminal.backend().buffer().clone())
}

/// Draw one frame off-screen as plain text, one line per terminal row.
pub fn render_to_text(state: &DashboardState, width: u16, height: u16) -> std::io::Result<String> {
    let buffer = render_to_buffer(state, width, height)?;
    Ok(buffer_to_text(&buffer))
}

/// Flatten a buffer into text, skipping cells covered by wide symbols.
pub fn buffer_to_text(buffer: &Buffer) -> String {
    let width = buffer.area.width.max(1) as usize;
    let mut lines = Vec::with_capacity(buffer.area.height as usize);
    for row in buffer.content.chunks(width) {
        let mut line = String::with_capacity(width);
        let mut skip = 0usize;
        for cell in row {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = cell.symbol();
            line.push_str(symbol);
            skip = symbol.width().saturating_sub(1);
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
