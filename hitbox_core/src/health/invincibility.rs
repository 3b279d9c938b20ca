//! Invincibility - Manual override plus a grace period after each damage attempt

use crate::timer::{Stopwatch, Timer};

/// Tracks whether an entity currently ignores incoming damage
#[derive(Debug)]
pub struct Invincibility {
    overridden: bool,
    grace_period: f64,
    timer: Box<dyn Timer>,
}

impl Default for Invincibility {
    fn default() -> Self {
        Invincibility {
            overridden: false,
            grace_period: 0.0,
            timer: Box::new(Stopwatch::new()),
        }
    }
}

impl Invincibility {
    /// Create with a grace period in seconds and the timer that measures it
    pub fn new(grace_period: f64, timer: Box<dyn Timer>) -> Self {
        Invincibility {
            overridden: false,
            grace_period,
            timer,
        }
    }

    /// Override set, or still inside the grace period
    pub fn is_active(&self) -> bool {
        self.overridden || self.timer.elapsed() < self.grace_period
    }

    /// Start a new grace period
    pub fn restart(&mut self) {
        self.timer.start();
    }

    /// Seconds since the last restart
    pub fn time_since_restart(&self) -> f64 {
        self.timer.elapsed()
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden
    }

    pub fn set_override(&mut self, overridden: bool) {
        self.overridden = overridden;
    }

    pub fn grace_period(&self) -> f64 {
        self.grace_period
    }

    pub fn set_grace_period(&mut self, seconds: f64) {
        self.grace_period = seconds;
    }

    /// Swap the timer; the new one decides whether a window is open
    pub fn set_timer(&mut self, timer: Box<dyn Timer>) {
        self.timer = timer;
    }
}
