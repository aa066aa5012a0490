//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from feed events

use super::state::DashboardState;
use super::view::DashboardView;

use crate::events::{Event as FeedEvent, EventType};
use crate::snapshot::DashboardSnapshot;

use std::time::Instant;

impl DashboardState {
    /// Advance to the frame at `now`, applying every queued event.
    pub fn update(&mut self, now: Instant) {
        self.frame_time = now;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(event, now);
        }
    }

    /// Replace the displayed snapshot and let the blinker see the new turn signal.
    pub fn apply_snapshot(&mut self, snapshot: DashboardSnapshot, now: Instant) {
        self.view = DashboardView::from_snapshot(&snapshot);
        self.blinker.observe(snapshot.turn_signal, now);
        self.snapshot = snapshot;
        self.snapshots_received += 1;
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, mut event: FeedEvent, now: Instant) {
        match event.event_type {
            EventType::Snapshot => {
                if let Some(snapshot) = event.snapshot.take() {
                    self.apply_snapshot(*snapshot, now);
                }
            }
            EventType::Finished => self.feed_finished = true,
            EventType::Error => {}
        }

        // Payload already applied; keep only the message
        self.add_to_activity_log(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
    use crate::logging::LogLevel;
    use crate::snapshot::TurnSignal;
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::blinker::BlinkTiming;
    use std::time::Duration;

    fn state(now: Instant) -> DashboardState {
        DashboardState::new(UIConfig::new(true, BlinkTiming::default()), now)
    }

    fn signal(turn_signal: Option<TurnSignal>) -> DashboardSnapshot {
        DashboardSnapshot {
            turn_signal,
            ..Default::default()
        }
    }

    #[test]
    fn test_latest_snapshot_wins() {
        let now = Instant::now();
        let mut state = state(now);
        for speed in [10.0, 20.0, 30.0] {
            let snapshot = DashboardSnapshot {
                speed: Some(speed),
                ..Default::default()
            };
            state.add_event(FeedEvent::snapshot(snapshot, format!("speed {}", speed)));
        }
        state.update(now);

        assert_eq!(state.snapshots_received, 3);
        assert_eq!(state.snapshot.speed, Some(30.0));
        assert_eq!(state.view.speed.label, "30 km/h");
        assert!(state.pending_events.is_empty());
        // Logged events no longer hold the payload
        assert!(state.activity_logs.iter().all(|e| e.snapshot.is_none()));
    }

    #[test]
    fn test_turn_signal_changes_drive_blinker() {
        let start = Instant::now();
        let mut state = state(start);

        state.apply_snapshot(signal(Some(TurnSignal::Left)), start);
        assert!(state.blinker.is_animating(TurnSignal::Left));
        assert!(!state.blinker.is_animating(TurnSignal::Right));

        let later = start + Duration::from_millis(250);
        state.apply_snapshot(signal(Some(TurnSignal::Right)), later);
        assert!(!state.blinker.is_animating(TurnSignal::Left));
        assert!(state.blinker.is_animating(TurnSignal::Right));
        assert!((state.blinker.opacity(TurnSignal::Right, later) - 1.0).abs() < 1e-9);

        state.apply_snapshot(signal(None), later);
        assert!(!state.blinker.is_animating(TurnSignal::Right));
    }

    #[test]
    fn test_finished_event_marks_feed_done() {
        let now = Instant::now();
        let mut state = state(now);
        state.add_event(FeedEvent::finished("Feed finished after 0 snapshots".into()));
        state.update(now);

        assert!(state.feed_finished);
        assert_eq!(
            state.latest_message().map(|e| e.msg.as_str()),
            Some("Feed finished after 0 snapshots")
        );
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let now = Instant::now();
        let mut state = state(now);
        for i in 0..(MAX_ACTIVITY_LOGS + 5) {
            state.add_event(FeedEvent::feed_with_level(
                format!("line {}", i),
                EventType::Error,
                LogLevel::Warn,
            ));
        }
        state.update(now);

        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "line 5");
    }
}
