//! Dashboard state management
//!
//! Contains the main dashboard state struct

use super::blinker::Blinker;
use super::view::DashboardView;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event as FeedEvent;
use crate::snapshot::DashboardSnapshot;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

/// Dashboard state: the latest snapshot, what it looks like, and the blinker.
#[derive(Debug)]
pub struct DashboardState {
    /// The most recent snapshot applied to the dashboard.
    pub snapshot: DashboardSnapshot,
    /// Display model derived from `snapshot`.
    pub view: DashboardView,
    /// Turn-signal animation handles.
    pub blinker: Blinker,
    /// Time of the frame being drawn.
    pub frame_time: Instant,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<FeedEvent>,
    /// Feed messages for display
    pub activity_logs: VecDeque<FeedEvent>,
    /// Number of snapshots applied so far.
    pub snapshots_received: usize,
    /// Whether the feed has reported that it is done.
    pub feed_finished: bool,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(ui_config: UIConfig, now: Instant) -> Self {
        Self {
            snapshot: DashboardSnapshot::default(),
            view: DashboardView::default(),
            blinker: Blinker::new(ui_config.blink_timing),
            frame_time: now,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            snapshots_received: 0,
            feed_finished: false,
            with_background_color: ui_config.with_background_color,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: FeedEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: FeedEvent) {
        self.pending_events.push_back(event);
    }

    /// Most recent feed message worth showing.
    pub fn latest_message(&self) -> Option<&FeedEvent> {
        self.activity_logs
            .iter()
            .rev()
            .find(|event| event.should_display())
    }
}
