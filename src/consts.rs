pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Defaults for the feed, the UI loop and the turn-signal animation,
    //! grouped by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of feed events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the channel between the feed worker and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Lines buffered between a blocking reader thread and its feed.
    pub const LINE_QUEUE_SIZE: usize = 64;

    // =============================================================================
    // RENDERING
    // =============================================================================

    /// Text shown in place of a missing value.
    pub const PLACEHOLDER: &str = "--";

    /// Text shown in place of a missing clock time.
    pub const TIME_PLACEHOLDER: &str = "--:--";

    /// Upper bound of both gauge fills.
    pub const GAUGE_MAX: f64 = 100.0;

    /// Default delay between frames (milliseconds)
    pub const FRAME_INTERVAL_MS: u64 = 50;

    /// Default size of the off-screen frame used by `render`.
    pub const RENDER_WIDTH: u16 = 80;
    pub const RENDER_HEIGHT: u16 = 32;

    // =============================================================================
    // TURN SIGNAL ANIMATION
    // =============================================================================

    pub mod blink {
        /// Duration of one ramp, full to dim or dim to full (milliseconds).
        /// A blink cycle is two ramps.
        pub const HALF_PERIOD_MS: u64 = 400;

        /// Opacity at the dim end of the ramp.
        pub const FLOOR_OPACITY: f64 = 0.2;

        /// Fixed opacity of an indicator that is not blinking.
        pub const INACTIVE_OPACITY: f64 = 0.3;
    }
}
