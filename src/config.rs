//! Application configuration.

use crate::consts::cli_consts::{FRAME_INTERVAL_MS, blink};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use std::{fs, path::Path};

/// Directory under the user's home that holds the configuration file.
const CONFIG_DIR: &str = ".vehicle-dash";
const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Delay between UI frames, in milliseconds.
    pub frame_interval_ms: u64,
    /// Duration of one turn-signal ramp, in milliseconds.
    pub blink_half_period_ms: u64,
    /// Opacity at the dim end of a blink.
    pub blink_floor: f64,
    /// Opacity of an indicator that is not blinking.
    pub inactive_opacity: f64,
    /// Paint the dashboard background. Off unless asked for.
    pub with_background_color: bool,
    /// Minimum delay between replayed snapshots. Zero replays as fast as read.
    pub replay_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_interval_ms: FRAME_INTERVAL_MS,
            blink_half_period_ms: blink::HALF_PERIOD_MS,
            blink_floor: blink::FLOOR_OPACITY,
            inactive_opacity: blink::INACTIVE_OPACITY,
            with_background_color: false,
            replay_interval_ms: 0,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration if the file exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }

    pub fn blink_half_period(&self) -> Duration {
        Duration::from_millis(self.blink_half_period_ms)
    }

    /// `None` when snapshots should be forwarded without pacing.
    pub fn replay_interval(&self) -> Option<Duration> {
        (self.replay_interval_ms > 0).then(|| Duration::from_millis(self.replay_interval_ms))
    }
}

/// Get the path to the configuration file, `$HOME/.vehicle-dash/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "Home directory not found",
    ))?;
    Ok(home_path.join(CONFIG_DIR).join(CONFIG_FILE))
}
