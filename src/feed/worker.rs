//! Feed worker: pulls snapshots from a source and forwards them as events

use super::source::SnapshotSource;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use log::debug;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

/// Common event sending utilities for the feed
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event. Returns false once the receiver is gone.
    pub async fn send_event(&self, event: Event) -> bool {
        self.sender.send(event).await.is_ok()
    }

    pub async fn send_feed_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> bool {
        self.send_event(Event::feed_with_level(message, event_type, log_level))
            .await
    }
}

/// Forward snapshots from `source` until it is exhausted, fails, or shutdown is signalled.
///
/// Returns the number of snapshots forwarded.
pub async fn run_feed(
    mut source: Box<dyn SnapshotSource>,
    events: EventSender,
    mut shutdown: broadcast::Receiver<()>,
    replay_interval: Option<Duration>,
) -> usize {
    let mut forwarded = 0usize;

    loop {
        let next = tokio::select! {
            _ = shutdown.recv() => break,
            next = source.next_snapshot() => next,
        };

        match next {
            Ok(Some(snapshot)) => {
                forwarded += 1;
                debug!("forwarding snapshot #{}", forwarded);
                let msg = format!("Snapshot #{} received", forwarded);
                if !events.send_event(Event::snapshot(snapshot, msg)).await {
                    break;
                }
                if let Some(interval) = replay_interval {
                    tokio::select! {
                        _ = shutdown.recv() => break,
                        _ = tokio::time::sleep(interval) => {}
                    }
                }
            }
            Ok(None) => {
                events
                    .send_event(Event::finished(format!(
                        "Feed finished after {} snapshots",
                        forwarded
                    )))
                    .await;
                break;
            }
            Err(e) => {
                let recoverable = e.is_recoverable();
                let sent = events
                    .send_feed_event(e.to_string(), EventType::Error, e.log_level())
                    .await;
                if !recoverable || !sent {
                    break;
                }
            }
        }
    }

    forwarded
}
