//! Solar array generation model.

use std::f64::consts::PI;

use rand::rngs::StdRng;

use crate::devices::types::uniform_noise;
use crate::sim::types::Tuning;

/// A solar array producing a half-sine daily generation arc.
///
/// Output is zero outside the daylight window `[06:00, 18:00)`. Inside it,
/// clear-sky output follows `max_kw * sin((hour - 6) * PI / 12)`, peaking at
/// noon, with a uniform cloud perturbation added and the sum floored at zero.
/// The model is stateless: output is recomputed from the time of day each
/// tick, never integrated from the previous value.
#[derive(Debug, Clone)]
pub struct SolarArray {
    /// Peak clear-sky output at noon (kW).
    pub max_kw: f64,
    /// Half-width of the uniform cloud noise band (kW).
    pub noise_kw: f64,
}

/// Daylight window bounds in hours of day.
const SUNRISE_HR: f64 = 6.0;
const SUNSET_HR: f64 = 18.0;

impl SolarArray {
    /// Builds the array from the scenario tuning.
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            max_kw: tuning.max_solar_kw.max(0.0),
            noise_kw: tuning.solar_noise_kw.max(0.0),
        }
    }

    /// Clear-sky output at the given hour, without noise (kW).
    pub fn clear_sky_kw(&self, time_of_day: f64) -> f64 {
        if (SUNRISE_HR..SUNSET_HR).contains(&time_of_day) {
            self.max_kw * ((time_of_day - SUNRISE_HR) * PI / 12.0).sin()
        } else {
            0.0
        }
    }

    /// Output for this tick, including cloud noise, floored at zero (kW).
    pub fn output_kw(&self, time_of_day: f64, rng: &mut StdRng) -> f64 {
        let clear_sky = self.clear_sky_kw(time_of_day);
        if clear_sky <= 0.0 {
            return 0.0;
        }
        (clear_sky + uniform_noise(rng, self.noise_kw)).max(0.0)
    }
}
