//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::logging::LogLevel;
use ratatui::prelude::Color;

/// Simulate opacity on a terminal by mixing `color` into `background`.
///
/// Only RGB colours can be mixed; anything else is returned unchanged.
pub fn fade(color: Color, background: Color, opacity: f64) -> Color {
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let alpha = opacity.clamp(0.0, 1.0);
            let mix = |front: u8, back: u8| {
                (back as f64 + (front as f64 - back as f64) * alpha).round() as u8
            };
            Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
        }
        _ => color,
    }
}

/// Get a ratatui color for a feed message based on its level
pub fn get_level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Error => Color::Red,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Info => Color::Cyan,
        LogLevel::Debug | LogLevel::Trace => Color::DarkGray,
    }
}

/// Format compact timestamp with time only from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract HH:MM:SS from "YYYY-MM-DD HH:MM:SS"
    match timestamp.split_once(' ') {
        Some((_, time_part)) => time_part.to_string(),
        None => timestamp.to_string(),
    }
}
