//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::config::Config;
use crate::events::Event as FeedEvent;
use crate::ui::dashboard::{BlinkTiming, DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub blink_timing: BlinkTiming,
    pub frame_interval: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, blink_timing: BlinkTiming) -> Self {
        Self {
            with_background_color,
            blink_timing,
            frame_interval: Config::default().frame_interval(),
        }
    }
}

impl From<&Config> for UIConfig {
    fn from(config: &Config) -> Self {
        Self {
            with_background_color: config.with_background_color,
            blink_timing: BlinkTiming::from(config),
            frame_interval: config.frame_interval(),
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The dashboard being displayed.
    state: DashboardState,

    /// Receives events from the feed worker.
    event_receiver: mpsc::Receiver<FeedEvent>,

    /// Broadcasts shutdown signal to the feed worker.
    shutdown_sender: broadcast::Sender<()>,

    /// How long to wait for input between frames.
    frame_interval: Duration,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        event_receiver: mpsc::Receiver<FeedEvent>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        let frame_interval = ui_config.frame_interval;
        Self {
            state: DashboardState::new(ui_config, Instant::now()),
            event_receiver,
            shutdown_sender,
            frame_interval,
        }
    }

    /// Move everything the feed has sent so far into the dashboard queue.
    fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.add_event(event);
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    // UI event loop
    loop {
        app.drain_events();
        app.state.update(Instant::now());
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(app.frame_interval)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    // Send shutdown signal to the feed
                    let _ = app.shutdown_sender.send(());
                    app.state.blinker.stop();
                    return Ok(());
                }
            }
        }
    }
}
