//! Backup generator model.

use crate::sim::types::Tuning;

/// A binary backup generator with no ramp-up or ramp-down: output is the
/// full fixed wattage when on, zero when off.
#[derive(Debug, Clone)]
pub struct Generator {
    /// Output while switched on (kW).
    pub rated_kw: f64,
}

impl Generator {
    /// Builds the generator from the scenario tuning.
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            rated_kw: tuning.generator_kw.max(0.0),
        }
    }

    /// Output for the given switch state (kW).
    pub fn output_kw(&self, on: bool) -> f64 {
        if on { self.rated_kw } else { 0.0 }
    }
}
