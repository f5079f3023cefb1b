//! Fixed-timestep scheduler.

/// A fixed-timestep accumulator driven by a monotonic host clock.
///
/// The host calls [`Scheduler::advance`] once per display frame with the
/// current time in milliseconds; the scheduler banks the elapsed time and
/// reports how many physics ticks are due, decoupling the simulation rate
/// from the frame rate. The accumulator is clamped to a few ticks' worth of
/// time so a long host suspension cannot trigger an unbounded catch-up
/// stall.
///
/// # Examples
///
/// ```
/// use gridpulse::sim::scheduler::Scheduler;
///
/// let mut sched = Scheduler::new(10.0, 5);
/// assert_eq!(sched.advance(0.0), 0); // establishes the reference time
/// assert_eq!(sched.advance(25.0), 2);
/// assert_eq!(sched.advance(35.0), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler {
    /// Length of one tick in milliseconds.
    tick_ms: f64,
    /// Cap on ticks reported per `advance` call.
    max_catchup: u32,
    /// Timestamp of the previous `advance`, once established.
    last_ms: Option<f64>,
    /// Banked elapsed time not yet consumed by ticks.
    accumulator_ms: f64,
    /// Whether the scheduler is running.
    active: bool,
}

impl Scheduler {
    /// Creates an active scheduler.
    ///
    /// # Panics
    ///
    /// Panics if `tick_ms` is not positive or `max_catchup` is zero.
    pub fn new(tick_ms: f64, max_catchup: u32) -> Self {
        assert!(tick_ms > 0.0, "tick_ms must be > 0");
        assert!(max_catchup > 0, "max_catchup must be > 0");
        Self {
            tick_ms,
            max_catchup,
            last_ms: None,
            accumulator_ms: 0.0,
            active: true,
        }
    }

    /// Banks elapsed time and returns the number of ticks now due.
    ///
    /// The first call after construction or [`Scheduler::restart`] only
    /// establishes the reference time and returns zero, so no retroactive
    /// simulated time is owed. Returns zero while stopped. A non-monotonic
    /// timestamp is treated as zero elapsed time.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        if !self.active {
            return 0;
        }
        let Some(last) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return 0;
        };
        let elapsed = (now_ms - last).max(0.0);
        self.last_ms = Some(now_ms);

        self.accumulator_ms += elapsed;
        let cap = f64::from(self.max_catchup) * self.tick_ms;
        if self.accumulator_ms > cap {
            self.accumulator_ms = cap;
        }

        let mut ticks = 0;
        while self.accumulator_ms >= self.tick_ms {
            self.accumulator_ms -= self.tick_ms;
            ticks += 1;
        }
        ticks
    }

    /// Stops the scheduler; subsequent `advance` calls return zero.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Restarts the scheduler from a clean slate: active, empty
    /// accumulator, reference time re-established on the next `advance`.
    pub fn restart(&mut self) {
        self.active = true;
        self.last_ms = None;
        self.accumulator_ms = 0.0;
    }

    /// Returns `true` while the scheduler is running.
    pub fn is_active(&self) -> bool {
        self.active
    }
}
