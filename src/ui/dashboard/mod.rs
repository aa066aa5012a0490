//! Modular dashboard implementation
//!
//! Split into logical modules for better maintainability

pub mod blinker;
pub mod components;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod updaters;
pub mod utils;
pub mod view;

// Re-export main types and functions for external use
pub use blinker::BlinkTiming;
pub use renderer::{render_dashboard, render_to_text};
pub use state::DashboardState;
pub use view::DashboardView;
