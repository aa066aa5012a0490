//! Dashboard colour tokens

use ratatui::prelude::Color;

pub const BACKGROUND: Color = Color::Rgb(0x0f, 0x17, 0x2a);
pub const PANEL: Color = Color::Rgb(0x1e, 0x29, 0x3b);

pub const TEXT: Color = Color::Rgb(0xf1, 0xf5, 0xf9);
pub const TEXT_MUTED: Color = Color::Rgb(0xcb, 0xd5, 0xe1);
pub const TEXT_LABEL: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const TEXT_INACTIVE: Color = Color::Rgb(0x64, 0x74, 0x8b);

pub const GEAR_FORWARD: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const GEAR_REVERSE: Color = Color::Rgb(0xf8, 0x71, 0x71);
pub const GEAR_NEUTRAL: Color = TEXT_MUTED;

pub const MODE_ECO: Color = Color::Rgb(0x10, 0xb9, 0x81);
pub const MODE_SPORTS: Color = Color::Rgb(0xf4, 0x3f, 0x5e);

pub const FAULT: Color = Color::Rgb(0xf8, 0x71, 0x71);
pub const OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);

pub const AMBER: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const SKY: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const LIGHT_BLUE: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const RED: Color = Color::Rgb(0xf8, 0x71, 0x71);

pub const LAMP_OFF: Color = Color::Rgb(0x33, 0x41, 0x55);

pub const GAUGE_BATTERY: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const GAUGE_SPEED: Color = BLUE;
pub const GAUGE_TRACK: Color = PANEL;

pub const BRAKE_ALERT: Color = Color::Rgb(0xdc, 0x26, 0x26);

pub const TURN_SIGNAL: Color = AMBER;
