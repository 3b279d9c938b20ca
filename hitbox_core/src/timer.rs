//! Timers used to measure invincibility windows
//!
//! A timer that was never started reports an infinite elapsed time, so a
//! freshly spawned entity is never inside its grace period.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

/// Measures time since the last `start()`, in seconds
pub trait Timer: fmt::Debug {
    /// Reset elapsed time to zero
    fn start(&mut self);

    /// Seconds since the last `start()`
    fn elapsed(&self) -> f64;
}

/// Wall-clock timer
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
}

impl Stopwatch {
    /// Create a stopwatch that has not been started
    pub fn new() -> Self {
        Self::default()
    }
}

impl Timer for Stopwatch {
    fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    fn elapsed(&self) -> f64 {
        self.started
            .map_or(f64::INFINITY, |started| started.elapsed().as_secs_f64())
    }
}

/// Timer advanced by hand, one entity at a time
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    now: f64,
    started: Option<f64>,
}

impl ManualTimer {
    /// Create a timer that has not been started
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward; negative deltas are ignored
    pub fn advance(&mut self, delta: f64) {
        if delta > 0.0 {
            self.now += delta;
        }
    }
}

impl Timer for ManualTimer {
    fn start(&mut self) {
        self.started = Some(self.now);
    }

    fn elapsed(&self) -> f64 {
        self.started.map_or(f64::INFINITY, |started| self.now - started)
    }
}

/// Simulated time shared by every timer created from it.
///
/// Cloning a clock shares the same time source.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    now: Rc<Cell<f64>>,
}

impl SimClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time in seconds
    pub fn now(&self) -> f64 {
        self.now.get()
    }

    /// Move time forward; negative deltas are ignored
    pub fn advance(&self, delta: f64) {
        if delta > 0.0 {
            self.now.set(self.now.get() + delta);
        }
    }

    /// Create a timer reading from this clock
    pub fn timer(&self) -> ClockTimer {
        ClockTimer {
            clock: self.clone(),
            started: None,
        }
    }
}

/// Timer driven by a [`SimClock`]
#[derive(Debug, Clone)]
pub struct ClockTimer {
    clock: SimClock,
    started: Option<f64>,
}

impl Timer for ClockTimer {
    fn start(&mut self) {
        self.started = Some(self.clock.now());
    }

    fn elapsed(&self) -> f64 {
        self.started
            .map_or(f64::INFINITY, |started| self.clock.now() - started)
    }
}
