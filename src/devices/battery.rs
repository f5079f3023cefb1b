//! Battery storage controller.

use crate::sim::types::{BatteryMode, Tuning};

/// A percentage-of-capacity battery store.
///
/// The battery exchanges a fixed power with the grid whenever it is
/// charging or discharging, and moves its level by a fixed percentage step
/// per tick. When the level reaches a bound the mode auto-resets to
/// [`BatteryMode::Idle`] on the following tick, without player input.
///
/// # Flow Convention
/// The returned flow is positive while discharging (supply to the grid)
/// and negative while charging (load on the grid).
#[derive(Debug, Clone)]
pub struct Battery {
    /// Power exchanged while charging or discharging (kW).
    pub rate_kw: f64,
    /// Level change per active tick (percentage points).
    pub step_pct: f64,
}

impl Battery {
    /// Builds the battery from the scenario tuning.
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            rate_kw: tuning.battery_rate_kw.max(0.0),
            step_pct: tuning.battery_step_pct.max(0.0),
        }
    }

    /// Advances the battery by one tick.
    ///
    /// Mutates `level` and `mode` in place and returns the grid flow in kW
    /// (positive = supply, negative = load, zero while idle). `level` stays
    /// in `[0, 100]`.
    pub fn step(&self, level: &mut f64, mode: &mut BatteryMode) -> f64 {
        match *mode {
            BatteryMode::Charge => {
                if *level < 100.0 {
                    *level = (*level + self.step_pct).min(100.0);
                    -self.rate_kw
                } else {
                    // Full: auto cut-off
                    *mode = BatteryMode::Idle;
                    0.0
                }
            }
            BatteryMode::Discharge => {
                if *level > 0.0 {
                    *level = (*level - self.step_pct).max(0.0);
                    self.rate_kw
                } else {
                    // Empty: auto cut-off
                    *mode = BatteryMode::Idle;
                    0.0
                }
            }
            BatteryMode::Idle => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn battery() -> Battery {
        Battery {
            rate_kw: 150.0,
            step_pct: 0.15,
        }
    }

    #[test]
    fn idle_contributes_nothing() {
        let b = battery();
        let mut level = 50.0;
        let mut mode = BatteryMode::Idle;
        assert_eq!(b.step(&mut level, &mut mode), 0.0);
        assert_eq!(level, 50.0);
        assert_eq!(mode, BatteryMode::Idle);
    }

    #[test]
    fn charging_is_load_and_raises_level() {
        let b = battery();
        let mut level = 50.0;
        let mut mode = BatteryMode::Charge;
        let flow = b.step(&mut level, &mut mode);
        assert_eq!(flow, -150.0);
        assert!((level - 50.15).abs() < 1e-12);
        assert_eq!(mode, BatteryMode::Charge);
    }

    #[test]
    fn discharging_is_supply_and_lowers_level() {
        let b = battery();
        let mut level = 50.0;
        let mut mode = BatteryMode::Discharge;
        let flow = b.step(&mut level, &mut mode);
        assert_eq!(flow, 150.0);
        assert!((level - 49.85).abs() < 1e-12);
        assert_eq!(mode, BatteryMode::Discharge);
    }

    #[test]
    fn charge_clamps_at_hundred_then_cuts_off_next_tick() {
        let b = battery();
        let mut level = 99.9;
        let mut mode = BatteryMode::Charge;

        // The tick that reaches the bound still charges.
        let flow = b.step(&mut level, &mut mode);
        assert_eq!(flow, -150.0);
        assert_eq!(level, 100.0);
        assert_eq!(mode, BatteryMode::Charge);

        // The next tick auto-resets to Idle with no flow.
        let flow = b.step(&mut level, &mut mode);
        assert_eq!(flow, 0.0);
        assert_eq!(level, 100.0);
        assert_eq!(mode, BatteryMode::Idle);
    }

    #[test]
    fn discharge_clamps_at_zero_then_cuts_off_next_tick() {
        let b = battery();
        let mut level = 0.1;
        let mut mode = BatteryMode::Discharge;

        let flow = b.step(&mut level, &mut mode);
        assert_eq!(flow, 150.0);
        assert_eq!(level, 0.0);
        assert_eq!(mode, BatteryMode::Discharge);

        let flow = b.step(&mut level, &mut mode);
        assert_eq!(flow, 0.0);
        assert_eq!(level, 0.0);
        assert_eq!(mode, BatteryMode::Idle);
    }

    #[test]
    fn level_stays_bounded_over_long_runs() {
        let b = battery();
        let mut level = 50.0;
        let mut mode = BatteryMode::Charge;
        for _ in 0..10_000 {
            b.step(&mut level, &mut mode);
            assert!((0.0..=100.0).contains(&level));
        }
        assert_eq!(level, 100.0);
        assert_eq!(mode, BatteryMode::Idle);

        mode = BatteryMode::Discharge;
        for _ in 0..10_000 {
            b.step(&mut level, &mut mode);
            assert!((0.0..=100.0).contains(&level));
        }
        assert_eq!(level, 0.0);
        assert_eq!(mode, BatteryMode::Idle);
    }
}
