//! City demand model.

use rand::rngs::StdRng;

use crate::devices::types::uniform_noise;
use crate::sim::types::Tuning;

/// Hour of the morning demand peak.
const MORNING_PEAK_HR: f64 = 9.0;
/// Hour of the evening demand peak.
const EVENING_PEAK_HR: f64 = 19.0;
/// Variance-like width of both Gaussian demand bumps (hours squared).
const PEAK_WIDTH: f64 = 4.0;

/// The aggregate city load: a base level, Gaussian morning and evening
/// peaks, uniform noise, and a difficulty multiplier that ramps with
/// survived days.
///
/// Stateless per tick: demand is a function of `(time_of_day, day)` plus
/// fresh noise, never integrated from the previous value.
#[derive(Debug, Clone)]
pub struct CityLoad {
    /// Demand floor before peaks and noise (kW).
    pub base_kw: f64,
    /// Morning peak amplitude, centered at 09:00 (kW).
    pub morning_peak_kw: f64,
    /// Evening peak amplitude, centered at 19:00 (kW).
    pub evening_peak_kw: f64,
    /// Half-width of the uniform noise band (kW).
    pub noise_kw: f64,
    /// Multiplier growth per survived day.
    pub growth_per_day: f64,
}

impl CityLoad {
    /// Builds the load model from the scenario tuning.
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            base_kw: tuning.base_demand_kw.max(0.0),
            morning_peak_kw: tuning.morning_peak_kw.max(0.0),
            evening_peak_kw: tuning.evening_peak_kw.max(0.0),
            noise_kw: tuning.demand_noise_kw.max(0.0),
            growth_per_day: tuning.demand_growth_per_day.max(0.0),
        }
    }

    /// Demand profile at the given hour without noise or day scaling (kW).
    pub fn profile_kw(&self, time_of_day: f64) -> f64 {
        let morning =
            self.morning_peak_kw * (-(time_of_day - MORNING_PEAK_HR).powi(2) / PEAK_WIDTH).exp();
        let evening =
            self.evening_peak_kw * (-(time_of_day - EVENING_PEAK_HR).powi(2) / PEAK_WIDTH).exp();
        self.base_kw + morning + evening
    }

    /// Difficulty multiplier for the given day: `1 + day * growth`.
    pub fn day_multiplier(&self, day: u32) -> f64 {
        1.0 + f64::from(day) * self.growth_per_day
    }

    /// Demand for this tick, including noise and day scaling, floored at
    /// zero (kW).
    pub fn demand_kw(&self, time_of_day: f64, day: u32, rng: &mut StdRng) -> f64 {
        let kw = (self.profile_kw(time_of_day) + uniform_noise(rng, self.noise_kw))
            * self.day_multiplier(day);
        kw.max(0.0)
    }
}
