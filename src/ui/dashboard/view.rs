//! Snapshot to display-model derivation
//!
//! `DashboardView::from_snapshot` is the whole rendering contract expressed as
//! data: every label, colour and gauge fill the components draw. It is total over
//! its input: absent fields become placeholders or inactive styling.

use super::theme;
use crate::consts::cli_consts::{GAUGE_MAX, PLACEHOLDER, TIME_PLACEHOLDER};
use crate::snapshot::{DashboardSnapshot, DriveMode, Gear, HeadlightStatus};
use ratatui::prelude::Color;

/// One circular gauge: how full it is and what it says.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeView {
    pub title: &'static str,
    /// Fill in percent, always within [0, 100].
    pub fill: u16,
    pub label: String,
    pub color: Color,
}

/// One cell of the parameter grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamView {
    pub icon: &'static str,
    pub icon_color: Color,
    pub label: &'static str,
    pub value: String,
}

/// One headlight lamp.
#[derive(Debug, Clone, PartialEq)]
pub struct LampView {
    pub icon: &'static str,
    pub label: &'static str,
    pub active: bool,
    pub active_color: Color,
}

impl LampView {
    pub fn icon_color(&self) -> Color {
        if self.active {
            self.active_color
        } else {
            theme::LAMP_OFF
        }
    }

    pub fn text_color(&self) -> Color {
        if self.active {
            theme::TEXT
        } else {
            theme::TEXT_INACTIVE
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub time: String,
    pub connected: bool,
    pub connection: String,
    pub hours: String,
    pub gear: String,
    pub gear_color: Color,
    pub params: [ParamView; 4],
    pub headlights: [LampView; 4],
    pub battery: GaugeView,
    pub speed: GaugeView,
    pub brake_alert: bool,
    pub range: String,
    pub mode: String,
    pub mode_color: Color,
    pub fault_detected: bool,
    pub faults: String,
}

impl DashboardView {
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        let connected = snapshot.connected();
        let fault_detected = snapshot.has_fault();
        let lights = snapshot.headlight_status.clone().unwrap_or_default();

        Self {
            time: format!(
                "Time: {}",
                snapshot.time.as_deref().unwrap_or(TIME_PLACEHOLDER)
            ),
            connected,
            connection: if connected {
                "Connected ✅".to_string()
            } else {
                "Disconnected ❌".to_string()
            },
            hours: format!("Hours: {}", format_hours(snapshot.odometer)),
            gear: snapshot
                .gear
                .map(|g| g.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            gear_color: gear_color(snapshot.gear),
            params: [
                ParamView {
                    icon: "♨",
                    icon_color: theme::RED,
                    label: "Battery Temp",
                    value: format!("{}°C", format_value(snapshot.battery_temp)),
                },
                ParamView {
                    icon: "↻",
                    icon_color: theme::SKY,
                    label: "Motor RPM",
                    value: format!("{} rpm", format_value(snapshot.motor_rpm)),
                },
                ParamView {
                    icon: "≈",
                    icon_color: theme::AMBER,
                    label: "Hydraulic RPM",
                    value: format!("{} rpm", format_value(snapshot.hydraulic_rpm)),
                },
                ParamView {
                    icon: "❄",
                    icon_color: theme::LIGHT_BLUE,
                    label: "Coolant Temp",
                    value: format!("{}°C", format_value(snapshot.coolant_temp)),
                },
            ],
            headlights: headlight_lamps(&lights),
            battery: GaugeView {
                title: "Battery",
                fill: gauge_fill(snapshot.battery_percentage),
                label: match snapshot.battery_percentage {
                    // Adding zero folds -0 into 0
                    Some(pct) => format!("{}%", pct.round() + 0.0),
                    None => format!("{}%", PLACEHOLDER),
                },
                color: theme::GAUGE_BATTERY,
            },
            speed: GaugeView {
                title: "Speed",
                fill: gauge_fill(snapshot.speed),
                label: format!("{} km/h", format_value(snapshot.speed)),
                color: theme::GAUGE_SPEED,
            },
            brake_alert: snapshot.brake_fault(),
            range: format!("{} km", format_value(snapshot.range)),
            mode: snapshot
                .mode
                .map(|m| m.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            mode_color: mode_color(snapshot.mode),
            fault_detected,
            faults: if fault_detected {
                "Detected ❌".to_string()
            } else {
                "None ✅".to_string()
            },
        }
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::from_snapshot(&DashboardSnapshot::default())
    }
}

/// Format a reading as-is, or the placeholder when absent.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Odometer minutes as hours with one decimal.
pub fn format_hours(odometer_minutes: Option<f64>) -> String {
    match odometer_minutes {
        Some(minutes) => format!("{:.1}", minutes / 60.0),
        None => PLACEHOLDER.to_string(),
    }
}

/// Gauge fill in percent. The bound only keeps the widget in range; labels show the raw value.
pub fn gauge_fill(value: Option<f64>) -> u16 {
    match value {
        Some(v) if v.is_finite() => v.clamp(0.0, GAUGE_MAX).round() as u16,
        _ => 0,
    }
}

pub fn gear_color(gear: Option<Gear>) -> Color {
    match gear {
        Some(Gear::Forward) => theme::GEAR_FORWARD,
        Some(Gear::Reverse) => theme::GEAR_REVERSE,
        Some(Gear::Neutral) | None => theme::GEAR_NEUTRAL,
    }
}

pub fn mode_color(mode: Option<DriveMode>) -> Color {
    match mode {
        Some(DriveMode::Eco) => theme::MODE_ECO,
        Some(DriveMode::Sports) => theme::MODE_SPORTS,
        None => theme::TEXT,
    }
}

fn headlight_lamps(lights: &HeadlightStatus) -> [LampView; 4] {
    let lamp = |icon, label, flag: Option<bool>, active_color| LampView {
        icon,
        label,
        active: flag.unwrap_or(false),
        active_color,
    };
    [
        lamp("◐", "Low", lights.low, theme::SKY),
        lamp("◉", "High", lights.high, theme::BLUE),
        lamp("⚠", "Hazard", lights.hazard, theme::AMBER),
        lamp("⚙", "Service", lights.service, theme::RED),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::BrakeStatus;

    #[test]
    fn test_empty_snapshot_renders_placeholders() {
        let view = DashboardView::from_snapshot(&DashboardSnapshot::default());

        assert_eq!(view.time, "Time: --:--");
        assert_eq!(view.hours, "Hours: --");
        assert_eq!(view.gear, "--");
        assert_eq!(view.gear_color, theme::GEAR_NEUTRAL);
        assert_eq!(view.mode, "--");
        assert_eq!(view.range, "-- km");
        assert_eq!(view.speed.label, "-- km/h");
        assert_eq!(view.speed.fill, 0);
        assert_eq!(view.battery.label, "--%");
        assert_eq!(view.battery.fill, 0);
        let values: Vec<&str> = view.params.iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, ["--°C", "-- rpm", "-- rpm", "--°C"]);
        assert!(view.headlights.iter().all(|lamp| !lamp.active));
        assert!(
            view.headlights
                .iter()
                .all(|lamp| lamp.icon_color() == theme::LAMP_OFF)
        );
        assert!(!view.brake_alert);
        assert!(!view.fault_detected);
        assert_eq!(view.faults, "None ✅");
        assert_eq!(view.connection, "Disconnected ❌");
    }

    #[test]
    fn test_odometer_minutes_render_as_hours() {
        assert_eq!(format_hours(Some(120.0)), "2.0");
        assert_eq!(format_hours(Some(90.0)), "1.5");
        assert_eq!(format_hours(Some(0.0)), "0.0");

        let snapshot = DashboardSnapshot {
            odometer: Some(120.0),
            ..Default::default()
        };
        assert_eq!(DashboardView::from_snapshot(&snapshot).hours, "Hours: 2.0");
    }

    #[test]
    fn test_speed_gauge_is_capped_but_label_is_not() {
        let snapshot = DashboardSnapshot {
            speed: Some(150.0),
            ..Default::default()
        };
        let view = DashboardView::from_snapshot(&snapshot);
        assert_eq!(view.speed.fill, 100);
        assert_eq!(view.speed.label, "150 km/h");
    }

    #[test]
    fn test_negative_speed_keeps_gauge_empty() {
        let snapshot = DashboardSnapshot {
            speed: Some(-4.0),
            ..Default::default()
        };
        let view = DashboardView::from_snapshot(&snapshot);
        assert_eq!(view.speed.fill, 0);
        assert_eq!(view.speed.label, "-4 km/h");
    }

    #[test]
    fn test_battery_gauge() {
        let snapshot = DashboardSnapshot {
            battery_percentage: Some(37.0),
            ..Default::default()
        };
        let view = DashboardView::from_snapshot(&snapshot);
        assert_eq!(view.battery.fill, 37);
        assert_eq!(view.battery.label, "37%");

        assert_eq!(gauge_fill(Some(36.6)), 37);
        assert_eq!(gauge_fill(Some(f64::NAN)), 0);
    }

    #[test]
    fn test_small_negative_battery_label_has_no_sign() {
        let snapshot = DashboardSnapshot {
            battery_percentage: Some(-0.3),
            ..Default::default()
        };
        let view = DashboardView::from_snapshot(&snapshot);
        assert_eq!(view.battery.label, "0%");
        assert_eq!(view.battery.fill, 0);
    }

    #[test]
    fn test_gear_text_and_colour() {
        let mut snapshot = DashboardSnapshot {
            gear: Some(Gear::Forward),
            ..Default::default()
        };
        let view = DashboardView::from_snapshot(&snapshot);
        assert_eq!(view.gear, "F");
        assert_eq!(view.gear_color, theme::GEAR_FORWARD);

        snapshot.gear = Some(Gear::Reverse);
        assert_eq!(
            DashboardView::from_snapshot(&snapshot).gear_color,
            theme::GEAR_REVERSE
        );

        snapshot.gear = Some(Gear::Neutral);
        let view = DashboardView::from_snapshot(&snapshot);
        assert_eq!(view.gear, "N");
        assert_eq!(view.gear_color, theme::GEAR_NEUTRAL);
    }

    #[test]
    fn test_mode_colours_are_distinct() {
        let eco = mode_color(Some(DriveMode::Eco));
        let sports = mode_color(Some(DriveMode::Sports));
        assert_ne!(eco, sports);

        let snapshot = DashboardSnapshot {
            mode: Some(DriveMode::Eco),
            ..Default::default()
        };
        assert_eq!(DashboardView::from_snapshot(&snapshot).mode, "ECO");
    }

    #[test]
    fn test_brake_alert_follows_bf_only() {
        let mut snapshot = DashboardSnapshot {
            brake_status: Some(BrakeStatus {
                bf: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(DashboardView::from_snapshot(&snapshot).brake_alert);

        snapshot.brake_status = Some(BrakeStatus {
            bf: Some(false),
            hb: Some(true),
            s: Some(true),
        });
        assert!(!DashboardView::from_snapshot(&snapshot).brake_alert);
    }

    #[test]
    fn test_fault_banner() {
        let mut snapshot = DashboardSnapshot {
            battery_has_fault: Some(true),
            motor_has_fault: Some(false),
            ..Default::default()
        };
        let view = DashboardView::from_snapshot(&snapshot);
        assert!(view.fault_detected);
        assert_eq!(view.faults, "Detected ❌");

        snapshot.battery_has_fault = Some(false);
        assert_eq!(DashboardView::from_snapshot(&snapshot).faults, "None ✅");
    }

    #[test]
    fn test_connection_banner() {
        let mut snapshot = DashboardSnapshot {
            is_connected: Some(true),
            ..Default::default()
        };
        assert_eq!(
            DashboardView::from_snapshot(&snapshot).connection,
            "Connected ✅"
        );
        snapshot.is_connected = Some(false);
        assert_eq!(
            DashboardView::from_snapshot(&snapshot).connection,
            "Disconnected ❌"
        );
    }

    #[test]
    fn test_headlight_flags_are_independent() {
        let snapshot = DashboardSnapshot {
            headlight_status: Some(HeadlightStatus {
                high: Some(true),
                service: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let view = DashboardView::from_snapshot(&snapshot);
        let active: Vec<bool> = view.headlights.iter().map(|l| l.active).collect();
        assert_eq!(active, [false, true, false, true]);
        assert_eq!(view.headlights[1].icon_color(), theme::BLUE);
        assert_eq!(view.headlights[0].text_color(), theme::TEXT_INACTIVE);
    }

    #[test]
    fn test_fractional_readings_keep_precision() {
        let snapshot = DashboardSnapshot {
            battery_temp: Some(31.5),
            motor_rpm: Some(2400.0),
            range: Some(12.25),
            ..Default::default()
        };
        let view = DashboardView::from_snapshot(&snapshot);
        assert_eq!(view.params[0].value, "31.5°C");
        assert_eq!(view.params[1].value, "2400 rpm");
        assert_eq!(view.range, "12.25 km");
    }
}
