/// Simulation engine, state store, and command surface.
pub mod engine;
pub mod power_balance;
/// Fixed-timestep accumulator scheduler.
pub mod scheduler;
pub mod types;
