//! Arcade micro-grid balancing simulation: keep the frequency at 50 Hz or
//! lose the city.

pub mod config;
pub mod devices;
/// Simulation engine, scheduler, and state types.
pub mod sim;
pub mod telemetry;
#[cfg(feature = "tui")]
pub mod tui;
