//! Device models for the micro-grid: environmental inputs and the
//! player-controlled resources.

/// Battery storage controller.
pub mod battery;
/// Aggregate city demand model.
pub mod demand;
/// Backup generator model.
pub mod generator;
/// Solar array generation model.
pub mod solar;
pub mod types;

// Re-export the main types for convenience
pub use battery::Battery;
pub use demand::CityLoad;
pub use generator::Generator;
pub use solar::SolarArray;
