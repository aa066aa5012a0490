//! Turn-signal blinker
//!
//! Each side owns at most one `BlinkHandle`. A handle is a periodic opacity ramp
//! anchored at the instant it was started; its value is computed from the frame
//! time, so there is no timer to leak. Dropping a handle cancels it.

use crate::config::Config;
use crate::snapshot::TurnSignal;
use std::time::{Duration, Instant};

/// Timing and opacity levels for the turn indicators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinkTiming {
    /// Duration of one ramp. A full blink cycle is two ramps.
    pub half_period: Duration,
    /// Opacity at the dim end of the ramp.
    pub floor: f64,
    /// Opacity of an indicator that is not blinking.
    pub inactive: f64,
}

impl From<&Config> for BlinkTiming {
    fn from(config: &Config) -> Self {
        Self {
            half_period: config.blink_half_period(),
            floor: config.blink_floor.clamp(0.0, 1.0),
            inactive: config.inactive_opacity.clamp(0.0, 1.0),
        }
    }
}

impl Default for BlinkTiming {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// A running blink animation for one indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct BlinkHandle {
    started_at: Instant,
    half_period: Duration,
    floor: f64,
}

impl BlinkHandle {
    fn start(now: Instant, timing: &BlinkTiming) -> Self {
        Self {
            started_at: now,
            half_period: timing.half_period,
            floor: timing.floor,
        }
    }

    /// Opacity at `now`: full to floor over one half period, then back to full.
    pub fn opacity_at(&self, now: Instant) -> f64 {
        let half = self.half_period.as_secs_f64();
        if half <= 0.0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f64();
        let phase = (elapsed / half) % 2.0;
        let depth = 1.0 - self.floor;
        if phase < 1.0 {
            1.0 - depth * phase
        } else {
            self.floor + depth * (phase - 1.0)
        }
    }
}

/// Owns the left and right blink handles and reacts to turn-signal changes.
#[derive(Debug, Clone)]
pub struct Blinker {
    timing: BlinkTiming,
    signal: Option<TurnSignal>,
    left: Option<BlinkHandle>,
    right: Option<BlinkHandle>,
}

impl Blinker {
    pub fn new(timing: BlinkTiming) -> Self {
        Self {
            timing,
            signal: None,
            left: None,
            right: None,
        }
    }

    /// Observe the latest turn-signal value.
    ///
    /// A change cancels whatever is running and starts the selected side from full
    /// opacity. Seeing the same value again keeps the current cycle.
    pub fn observe(&mut self, signal: Option<TurnSignal>, now: Instant) {
        if signal == self.signal {
            return;
        }
        self.signal = signal;
        self.left = None;
        self.right = None;
        match signal {
            Some(TurnSignal::Left) => self.left = Some(BlinkHandle::start(now, &self.timing)),
            Some(TurnSignal::Right) => self.right = Some(BlinkHandle::start(now, &self.timing)),
            None => {}
        }
    }

    /// Cancel both animations.
    pub fn stop(&mut self) {
        self.signal = None;
        self.left = None;
        self.right = None;
    }

    pub fn signal(&self) -> Option<TurnSignal> {
        self.signal
    }

    pub fn is_animating(&self, side: TurnSignal) -> bool {
        self.handle(side).is_some()
    }

    /// Opacity of the indicator for `side` at `now`.
    pub fn opacity(&self, side: TurnSignal, now: Instant) -> f64 {
        match self.handle(side) {
            Some(handle) => handle.opacity_at(now),
            None => self.timing.inactive,
        }
    }

    fn handle(&self, side: TurnSignal) -> Option<&BlinkHandle> {
        match side {
            TurnSignal::Left => self.left.as_ref(),
            TurnSignal::Right => self.right.as_ref(),
        }
    }
}

impl Default for Blinker {
    fn default() -> Self {
        Self::new(BlinkTiming::default())
    }
}
