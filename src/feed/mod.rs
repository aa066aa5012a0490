//! Snapshot feed
//!
//! Sources produce `DashboardSnapshot`s; the feed worker forwards them to the UI
//! as events.

pub mod source;
pub mod worker;

pub use source::open_source;
pub use worker::{EventSender, run_feed};
