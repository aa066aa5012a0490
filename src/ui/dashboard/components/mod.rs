//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod bottom_row;
pub mod brake;
pub mod footer;
pub mod gauges;
pub mod headlights;
pub mod params;
pub mod signals;
pub mod top_bar;
