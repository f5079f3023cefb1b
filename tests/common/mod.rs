//! Shared builders for integration tests.

use gridpulse::sim::types::Tuning;

/// Tuning with all stochastic and time-varying terms zeroed: noise bands,
/// demand peaks, difficulty growth, and the simulated clock. Each tick then
/// applies a fully predictable power balance.
pub fn quiet_tuning(base_demand_kw: f64) -> Tuning {
    Tuning {
        base_demand_kw,
        max_solar_kw: 0.0,
        solar_noise_kw: 0.0,
        demand_noise_kw: 0.0,
        morning_peak_kw: 0.0,
        evening_peak_kw: 0.0,
        demand_growth_per_day: 0.0,
        time_speed: 0.0,
        ..Tuning::default()
    }
}

/// A quiet tuning where the generator exactly covers demand, so a run with
/// the generator on holds 50.0 Hz indefinitely.
pub fn balanced_tuning() -> Tuning {
    Tuning {
        generator_kw: 300.0,
        ..quiet_tuning(300.0)
    }
}
