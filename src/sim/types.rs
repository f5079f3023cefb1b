//! Core simulation types: tunable parameters and the canonical grid state.

use serde::Serialize;

/// Named tunable parameters of the grid model.
///
/// Defaults reproduce the baseline game balance: a 60 Hz physics tick,
/// a 50 Hz grid with failure thresholds at 45/55 Hz, and roughly 1.2
/// simulated hours per wall-clock second.
///
/// # Examples
///
/// ```
/// use gridpulse::sim::types::Tuning;
///
/// let t = Tuning::default();
/// assert_eq!(t.target_hz, 50.0);
/// assert!(t.failure_low_hz < t.target_hz && t.target_hz < t.failure_high_hz);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Tuning {
    /// Length of one physics tick in milliseconds.
    pub tick_ms: f64,
    /// Nominal grid frequency (Hz).
    pub target_hz: f64,
    /// Blackout threshold, inclusive (Hz).
    pub failure_low_hz: f64,
    /// Explosion threshold, inclusive (Hz).
    pub failure_high_hz: f64,
    /// Total battery energy capacity (kWh). Display only; the charge
    /// dynamics work in percent of capacity.
    pub battery_capacity_kwh: f64,
    /// Battery power while charging or discharging (kW).
    pub battery_rate_kw: f64,
    /// Battery level change per tick while charging or discharging
    /// (percentage points).
    pub battery_step_pct: f64,
    /// Backup generator output when switched on (kW).
    pub generator_kw: f64,
    /// City demand floor before peaks and noise (kW).
    pub base_demand_kw: f64,
    /// Peak clear-sky solar output at noon (kW).
    pub max_solar_kw: f64,
    /// Frequency change per kW of net power imbalance, per tick (Hz).
    pub frequency_sensitivity: f64,
    /// Simulated hours advanced per tick.
    pub time_speed: f64,
    /// Half-width of the uniform solar cloud noise band (kW).
    pub solar_noise_kw: f64,
    /// Half-width of the uniform demand noise band (kW).
    pub demand_noise_kw: f64,
    /// Demand multiplier growth per survived day (0.05 = +5%/day).
    pub demand_growth_per_day: f64,
    /// Morning demand peak amplitude, centered at 09:00 (kW).
    pub morning_peak_kw: f64,
    /// Evening demand peak amplitude, centered at 19:00 (kW).
    pub evening_peak_kw: f64,
    /// Master random seed for noise generation.
    pub seed: u64,
    /// Maximum physics ticks executed per scheduler advance.
    pub max_catchup_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_ms: 1000.0 / 60.0,
            target_hz: 50.0,
            failure_low_hz: 45.0,
            failure_high_hz: 55.0,
            battery_capacity_kwh: 2000.0,
            battery_rate_kw: 150.0,
            battery_step_pct: 0.15,
            generator_kw: 300.0,
            base_demand_kw: 200.0,
            max_solar_kw: 600.0,
            frequency_sensitivity: 0.005,
            time_speed: 0.02,
            solar_noise_kw: 25.0,
            demand_noise_kw: 20.0,
            demand_growth_per_day: 0.05,
            morning_peak_kw: 150.0,
            evening_peak_kw: 200.0,
            seed: 42,
            max_catchup_ticks: 5,
        }
    }
}

/// Operational state of the battery storage device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BatteryMode {
    /// Neither supply nor load.
    Idle,
    /// Absorbing power from the grid (counts as load).
    Charge,
    /// Supplying power to the grid (counts as supply).
    Discharge,
}

impl BatteryMode {
    /// Short uppercase label for telemetry and display.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Charge => "CHARGE",
            Self::Discharge => "DISCHARGE",
        }
    }
}

/// Win/loss state of the simulation.
///
/// `Blackout` and `Explosion` are terminal: once entered, only an explicit
/// reset returns the simulation to `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GridStatus {
    /// Simulation is live and accepting commands.
    Playing,
    /// Frequency fell to or below the low failure threshold.
    Blackout,
    /// Frequency rose to or above the high failure threshold.
    Explosion,
}

impl GridStatus {
    /// Returns `true` while the simulation is live.
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }

    /// Short uppercase label for telemetry and display.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "PLAYING",
            Self::Blackout => "BLACKOUT",
            Self::Explosion => "EXPLOSION",
        }
    }
}

/// Canonical simulation state, owned exclusively by the engine.
///
/// Consumers never hold a reference to the live value; they receive copies
/// via [`crate::sim::engine::Engine::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridState {
    /// Hour of the simulated day, in `[0, 24)`.
    pub time_of_day: f64,
    /// Simulated day counter, starting at 1.
    pub day: u32,
    /// Grid electrical frequency (Hz). Frozen once `status` is terminal.
    pub frequency: f64,
    /// Total supply minus total load this tick (kW).
    pub net_power: f64,
    /// Battery charge as a percentage, always in `[0, 100]`.
    pub battery_level: f64,
    /// Solar generation this tick (kW, never negative).
    pub solar_output: f64,
    /// City demand this tick (kW, never negative).
    pub city_demand: f64,
    /// Generator output this tick: zero or the fixed wattage (kW).
    pub generator_output: f64,
    /// Whether the backup generator is switched on.
    pub is_generator_on: bool,
    /// Player-selected battery mode; auto-resets to `Idle` at the
    /// battery bounds.
    pub battery_mode: BatteryMode,
    /// Win/loss state.
    pub status: GridStatus,
    /// Ticks survived while `Playing`.
    pub score: u64,
}

impl GridState {
    /// Returns the initial state: 06:00 on day 1, battery at 50%,
    /// frequency on target, everything off and idle.
    pub fn initial(tuning: &Tuning) -> Self {
        Self {
            time_of_day: 6.0,
            day: 1,
            frequency: tuning.target_hz,
            net_power: 0.0,
            battery_level: 50.0,
            solar_output: 0.0,
            city_demand: tuning.base_demand_kw,
            generator_output: 0.0,
            is_generator_on: false,
            battery_mode: BatteryMode::Idle,
            status: GridStatus::Playing,
            score: 0,
        }
    }

    /// Energy currently stored in the battery (kWh).
    pub fn battery_stored_kwh(&self, tuning: &Tuning) -> f64 {
        self.battery_level / 100.0 * tuning.battery_capacity_kwh
    }
}
