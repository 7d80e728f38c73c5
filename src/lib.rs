//! KOSIS monthly labor-statistics dashboard.
//!
//! Loads the observation CSV once, derives the selector options, and rebuilds
//! a monthly line chart whenever the item / sex / age / year selection changes.
//! The chart is served over HTTP (`kosis-dash`) or shown in a native window
//! (`kosis-viewer`).

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod logging;
pub mod server;
