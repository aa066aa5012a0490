//! Session setup and initialization

use crate::config::Config;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::error::FeedError;
use crate::events::Event;
use crate::feed::{EventSender, open_source, run_feed};
use log::debug;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for feed events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Join handle for the feed task; resolves to the number of snapshots forwarded
    pub join_handle: JoinHandle<usize>,
    /// Shutdown sender to stop the feed
    pub shutdown_sender: broadcast::Sender<()>,
    /// Where snapshots are read from, for display purposes
    pub input: String,
}

/// Sets up a feed session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Opens the snapshot source
/// 2. Sets up the event and shutdown channels
/// 3. Starts the feed worker
///
/// # Arguments
/// * `config` - Resolved configuration
/// * `input` - `-` for stdin, otherwise a path to a JSON-lines file
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The input could not be opened
pub async fn setup_session(config: &Config, input: &str) -> Result<SessionData, FeedError> {
    let source = open_source(input).await?;
    debug!("opened snapshot source {}", input);

    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let join_handle = tokio::spawn(run_feed(
        source,
        EventSender::new(event_sender),
        shutdown_sender.subscribe(),
        config.replay_interval(),
    ));

    Ok(SessionData {
        event_receiver,
        join_handle,
        shutdown_sender,
        input: input.to_string(),
    })
}
