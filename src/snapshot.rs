//! Telemetry snapshot model
//!
//! One `DashboardSnapshot` is the flat set of already-computed values shown on a
//! single frame. Every field is optional: producers may send any subset.

use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Selected transmission gear.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Gear {
    #[strum(serialize = "f", to_string = "F")]
    Forward,
    #[strum(serialize = "n", to_string = "N")]
    Neutral,
    #[strum(serialize = "r", to_string = "R")]
    Reverse,
}

/// Drive mode selected by the driver.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DriveMode {
    #[strum(serialize = "eco", to_string = "ECO")]
    Eco,
    #[strum(serialize = "sports", to_string = "SPORTS")]
    Sports,
}

/// Which turn indicator the vehicle reports as active.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TurnSignal {
    Left,
    Right,
}

/// Brake subsystem flags.
///
/// Only `bf` (brake fault) has a visual treatment. `hb` and `s` are accepted so
/// producers can send them, but nothing on the dashboard reacts to them yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BrakeStatus {
    #[serde(default)]
    pub bf: Option<bool>,
    #[serde(default)]
    pub hb: Option<bool>,
    #[serde(default)]
    pub s: Option<bool>,
}

/// Lamp flags for the headlight row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HeadlightStatus {
    #[serde(default)]
    pub low: Option<bool>,
    #[serde(default)]
    pub high: Option<bool>,
    #[serde(default)]
    pub hazard: Option<bool>,
    #[serde(default)]
    pub service: Option<bool>,
}

/// Values supplied to the dashboard for one render.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSnapshot {
    /// Vehicle speed in km/h.
    pub speed: Option<f64>,
    /// Wall clock text, expected as HH:MM.
    pub time: Option<String>,
    pub battery_percentage: Option<f64>,
    #[serde(deserialize_with = "lenient_code")]
    pub gear: Option<Gear>,
    #[serde(deserialize_with = "lenient_code")]
    pub mode: Option<DriveMode>,
    /// Remaining range in km.
    pub range: Option<f64>,
    /// Operating time in minutes.
    pub odometer: Option<f64>,
    #[serde(deserialize_with = "lenient_code")]
    pub turn_signal: Option<TurnSignal>,
    pub brake_status: Option<BrakeStatus>,
    pub is_connected: Option<bool>,
    pub headlight_status: Option<HeadlightStatus>,
    pub battery_has_fault: Option<bool>,
    pub motor_has_fault: Option<bool>,
    /// Battery temperature in °C.
    pub battery_temp: Option<f64>,
    /// Coolant temperature in °C.
    pub coolant_temp: Option<f64>,
    pub motor_rpm: Option<f64>,
    pub hydraulic_rpm: Option<f64>,
}

impl DashboardSnapshot {
    /// Parse a snapshot from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// True when the brake fault flag is set.
    pub fn brake_fault(&self) -> bool {
        self.brake_status
            .as_ref()
            .and_then(|b| b.bf)
            .unwrap_or(false)
    }

    /// True when either the battery or the motor reports a fault.
    pub fn has_fault(&self) -> bool {
        self.battery_has_fault.unwrap_or(false) || self.motor_has_fault.unwrap_or(false)
    }

    pub fn connected(&self) -> bool {
        self.is_connected.unwrap_or(false)
    }
}

/// Decode an optional enum code, treating null and unrecognised codes as absent.
fn lenient_code<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let code: Option<String> = Option::deserialize(deserializer)?;
    Ok(code.and_then(|c| c.trim().parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_all_absent() {
        let snapshot = DashboardSnapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, DashboardSnapshot::default());
        assert!(!snapshot.brake_fault());
        assert!(!snapshot.has_fault());
        assert!(!snapshot.connected());
    }

    #[test]
    fn test_parses_camel_case_fields() {
        let json = r#"{
            "speed": 42.5,
            "time": "08:15",
            "batteryPercentage": 37,
            "gear": "f",
            "mode": "eco",
            "turnSignal": "left",
            "brakeStatus": { "bf": true, "hb": false },
            "isConnected": true,
            "headlightStatus": { "low": true, "hazard": true },
            "motorHasFault": true,
            "hydraulicRpm": 1200
        }"#;
        let snapshot = DashboardSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.speed, Some(42.5));
        assert_eq!(snapshot.time.as_deref(), Some("08:15"));
        assert_eq!(snapshot.battery_percentage, Some(37.0));
        assert_eq!(snapshot.gear, Some(Gear::Forward));
        assert_eq!(snapshot.mode, Some(DriveMode::Eco));
        assert_eq!(snapshot.turn_signal, Some(TurnSignal::Left));
        assert!(snapshot.brake_fault());
        assert!(snapshot.connected());
        assert!(snapshot.has_fault());
        assert_eq!(snapshot.hydraulic_rpm, Some(1200.0));
        let lights = snapshot.headlight_status.unwrap();
        assert_eq!(lights.low, Some(true));
        assert_eq!(lights.high, None);
    }

    #[test]
    fn test_enum_codes_are_case_insensitive() {
        let snapshot =
            DashboardSnapshot::from_json(r#"{"gear":"R","mode":"SPORTS","turnSignal":"Right"}"#)
                .unwrap();
        assert_eq!(snapshot.gear, Some(Gear::Reverse));
        assert_eq!(snapshot.mode, Some(DriveMode::Sports));
        assert_eq!(snapshot.turn_signal, Some(TurnSignal::Right));
    }

    #[test]
    fn test_unknown_codes_and_nulls_are_absent() {
        let snapshot =
            DashboardSnapshot::from_json(r#"{"gear":"p","mode":null,"turnSignal":"both"}"#)
                .unwrap();
        assert_eq!(snapshot.gear, None);
        assert_eq!(snapshot.mode, None);
        assert_eq!(snapshot.turn_signal, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let snapshot =
            DashboardSnapshot::from_json(r##"{"glowColor":"#fff","glowIntensity":3,"speed":1}"##)
                .unwrap();
        assert_eq!(snapshot.speed, Some(1.0));
    }

    #[test]
    fn test_gear_display_is_upper_case() {
        assert_eq!(Gear::Forward.to_string(), "F");
        assert_eq!(Gear::Neutral.to_string(), "N");
        assert_eq!(DriveMode::Sports.to_string(), "SPORTS");
    }
}
