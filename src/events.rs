//! Event System
//!
//! Types and implementations for feed events and logging

use crate::logging::{LogLevel, should_log_with_env};
use crate::snapshot::DashboardSnapshot;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// A new snapshot arrived from the feed.
    Snapshot,
    Error,
    /// The feed has no more snapshots.
    Finished,
}

#[derive(Debug, Clone)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Payload for snapshot events
    pub snapshot: Option<Box<DashboardSnapshot>>,
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.msg == other.msg
            && self.timestamp == other.timestamp
            && self.event_type == other.event_type
            && self.log_level == other.log_level
            && self.snapshot == other.snapshot
    }
}

impl Event {
    fn new(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            snapshot: None,
        }
    }

    pub fn snapshot(snapshot: DashboardSnapshot, msg: String) -> Self {
        Self {
            snapshot: Some(Box::new(snapshot)),
            ..Self::new(msg, EventType::Snapshot, LogLevel::Debug)
        }
    }

    pub fn feed_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(msg, event_type, log_level)
    }

    pub fn finished(msg: String) -> Self {
        Self::new(msg, EventType::Finished, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Snapshots are shown on the dashboard itself, not as log lines
        if self.event_type == EventType::Snapshot {
            return should_log_with_env(self.log_level);
        }
        self.log_level >= LogLevel::Info || should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
