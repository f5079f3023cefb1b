//! Game runner and TUI application state.

use std::collections::VecDeque;
use std::time::Instant;

use crate::config::ScenarioConfig;
use crate::sim::engine::Engine;
use crate::sim::types::{BatteryMode, GridState};

/// Maximum number of snapshots kept for the rolling frequency chart.
const MAX_HISTORY: usize = 240;

/// TUI application state: the engine plus presentation-side history.
///
/// The app never touches the engine's state directly; it reads snapshots
/// and issues commands, which is the whole external contract of the engine.
pub struct App {
    /// The simulation engine.
    engine: Engine,
    /// Rolling snapshot history for the chart.
    pub history: VecDeque<GridState>,
    /// Monotonic epoch for the host clock.
    epoch: Instant,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates a new app from a validated scenario configuration.
    pub fn new(cfg: &ScenarioConfig) -> Self {
        Self {
            engine: Engine::new(cfg.tuning()),
            history: VecDeque::with_capacity(MAX_HISTORY),
            epoch: Instant::now(),
            quit: false,
        }
    }

    /// Advances the engine using the wall clock and records a snapshot.
    pub fn advance(&mut self) {
        let now_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
        self.advance_to(now_ms);
    }

    /// Advances the engine to an explicit host timestamp (ms).
    pub fn advance_to(&mut self, now_ms: f64) {
        let ran = self.engine.advance(now_ms);
        if ran > 0 {
            if self.history.len() >= MAX_HISTORY {
                self.history.pop_front();
            }
            self.history.push_back(self.engine.snapshot());
        }
    }

    /// Latest state snapshot.
    pub fn snapshot(&self) -> GridState {
        self.engine.snapshot()
    }

    /// Active tuning (for thresholds and capacity display).
    pub fn tuning(&self) -> &crate::sim::types::Tuning {
        self.engine.tuning()
    }

    /// Flips the backup generator.
    pub fn toggle_generator(&mut self) {
        self.engine.toggle_generator();
    }

    /// Sets the battery mode.
    pub fn set_battery_mode(&mut self, mode: BatteryMode) {
        self.engine.set_battery_mode(mode);
    }

    /// Resets the game and clears the chart history.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.history.clear();
    }
}
