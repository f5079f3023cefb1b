//! Simulation engine that orchestrates devices, frequency dynamics, and the
//! win/loss state machine.

use rand::{SeedableRng, rngs::StdRng};

use crate::devices::{Battery, CityLoad, Generator, SolarArray};

use super::power_balance::net_power_kw;
use super::scheduler::Scheduler;
use super::types::{BatteryMode, GridState, GridStatus, Tuning};

/// Simulation engine owning the canonical [`GridState`], all devices, and
/// the fixed-timestep scheduler.
///
/// Holds typed device fields rather than trait objects since the device set
/// is fixed. The state is never exposed by reference; consumers take copies
/// via [`Engine::snapshot`] and mutate only through the command methods.
pub struct Engine {
    tuning: Tuning,
    solar: SolarArray,
    city: CityLoad,
    battery: Battery,
    generator: Generator,
    scheduler: Scheduler,
    rng: StdRng,
    state: GridState,
}

impl Engine {
    /// Creates an engine in the initial state with an active scheduler.
    pub fn new(tuning: Tuning) -> Self {
        let solar = SolarArray::from_tuning(&tuning);
        let city = CityLoad::from_tuning(&tuning);
        let battery = Battery::from_tuning(&tuning);
        let generator = Generator::from_tuning(&tuning);
        let scheduler = Scheduler::new(tuning.tick_ms, tuning.max_catchup_ticks);
        let rng = StdRng::seed_from_u64(tuning.seed);
        let state = GridState::initial(&tuning);
        Self {
            tuning,
            solar,
            city,
            battery,
            generator,
            scheduler,
            rng,
            state,
        }
    }

    /// Banks host time and runs every physics tick now due.
    ///
    /// Called by the presentation layer once per display frame with a
    /// monotonic timestamp in milliseconds. Returns the number of ticks
    /// executed. The scheduler stops itself once the status leaves
    /// `Playing`; only [`Engine::reset`] restarts it.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let due = self.scheduler.advance(now_ms);
        let mut ran = 0;
        for _ in 0..due {
            self.step();
            ran += 1;
            if !self.state.status.is_playing() {
                self.scheduler.stop();
                break;
            }
        }
        ran
    }

    /// Executes one physics tick against the canonical state.
    ///
    /// A no-op once the status is terminal: no field changes, including
    /// `score` and `frequency`.
    pub fn step(&mut self) {
        let s = &mut self.state;

        if !s.status.is_playing() {
            return;
        }

        // 1. Advance simulated time
        s.time_of_day += self.tuning.time_speed;
        if s.time_of_day >= 24.0 {
            s.time_of_day = 0.0;
            s.day += 1;
        }

        // 2. Environmental inputs
        s.solar_output = self.solar.output_kw(s.time_of_day, &mut self.rng);
        s.city_demand = self.city.demand_kw(s.time_of_day, s.day, &mut self.rng);

        // 3. Battery flow and auto cut-off
        let battery_flow_kw = self
            .battery
            .step(&mut s.battery_level, &mut s.battery_mode);

        // 4. Generator
        s.generator_output = self.generator.output_kw(s.is_generator_on);

        // 5. Power balance
        s.net_power = net_power_kw(
            s.solar_output,
            s.generator_output,
            battery_flow_kw,
            s.city_demand,
        );

        // 6. First-order frequency response, no damping
        s.frequency += s.net_power * self.tuning.frequency_sensitivity;

        // 7. Win/loss check, low bound first; the entering tick scores nothing
        if s.frequency <= self.tuning.failure_low_hz {
            s.status = GridStatus::Blackout;
        } else if s.frequency >= self.tuning.failure_high_hz {
            s.status = GridStatus::Explosion;
        } else {
            s.score += 1;
        }

        debug_assert!((0.0..=100.0).contains(&s.battery_level));
        debug_assert!(s.frequency.is_finite());
    }

    /// Returns a read-only copy of the canonical state.
    pub fn snapshot(&self) -> GridState {
        self.state
    }

    /// Flips the generator switch. Silent no-op unless the status is
    /// `Playing`.
    pub fn toggle_generator(&mut self) {
        if !self.state.status.is_playing() {
            return;
        }
        self.state.is_generator_on = !self.state.is_generator_on;
    }

    /// Sets the battery mode directly (not a toggle). Silent no-op unless
    /// the status is `Playing`.
    pub fn set_battery_mode(&mut self, mode: BatteryMode) {
        if !self.state.status.is_playing() {
            return;
        }
        self.state.battery_mode = mode;
    }

    /// Restores the initial state, reseeds the noise source, and restarts
    /// the scheduler. Always valid, including from a terminal status.
    pub fn reset(&mut self) {
        self.state = GridState::initial(&self.tuning);
        self.rng = StdRng::seed_from_u64(self.tuning.seed);
        self.scheduler.restart();
    }

    /// Returns `true` while the scheduler is running.
    pub fn is_running(&self) -> bool {
        self.scheduler.is_active()
    }

    /// Returns the active tuning.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
