//! Error types for the snapshot feed

use crate::logging::LogLevel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// Reading from the underlying input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be decoded as a snapshot.
    #[error("Invalid snapshot on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl FeedError {
    /// Log level used when reporting this error on the dashboard.
    pub fn log_level(&self) -> LogLevel {
        match self {
            // One bad record does not stop the feed
            FeedError::Parse { .. } => LogLevel::Warn,
            FeedError::Io(_) => LogLevel::Error,
        }
    }

    /// Whether the feed can keep reading after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FeedError::Parse { .. })
    }
}
