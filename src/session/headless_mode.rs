//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::{Event, EventType};
use crate::snapshot::DashboardSnapshot;
use crate::ui::dashboard::DashboardView;
use std::error::Error;

/// One console line describing a snapshot.
pub fn snapshot_summary(snapshot: &DashboardSnapshot) -> String {
    let view = DashboardView::from_snapshot(snapshot);
    let signal = snapshot
        .turn_signal
        .map(|s| s.to_string())
        .unwrap_or_else(|| "off".to_string());
    let mut line = format!(
        "{} | Gear {} | {} | Battery {} | Range {} | Mode {} | Signal {} | {}",
        view.time,
        view.gear,
        view.speed.label,
        view.battery.label,
        view.range,
        view.mode,
        signal,
        view.connection,
    );
    if view.brake_alert {
        line.push_str(" | BRAKE");
    }
    if view.fault_detected {
        line.push_str(" | Faults: ");
        line.push_str(&view.faults);
    }
    line
}

/// Whether the headless loop should stop after this event.
fn print_event(event: &Event) -> bool {
    if event.should_display() {
        println!("{}", event);
    }
    if let Some(snapshot) = event.snapshot.as_deref() {
        println!("{}", snapshot_summary(snapshot));
    }
    event.event_type == EventType::Finished
}

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. Ctrl+C shutdown handling
/// 3. Event loop management
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Headless mode failed
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.input);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();

    // Event loop: log events to console until the feed ends or shutdown
    loop {
        tokio::select! {
            event = session.event_receiver.recv() => {
                match event {
                    Some(event) => {
                        if print_event(&event) {
                            break;
                        }
                    }
                    None => break,
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    // Wait for the feed to finish
    print_session_shutdown();
    let _ = session.shutdown_sender.send(());
    drop(session.event_receiver);
    let snapshots = session.join_handle.await.unwrap_or_default();
    print_session_exit_success(snapshots);

    Ok(())
}
