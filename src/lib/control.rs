//! Cooperative cancellation and step pacing for a sort worker.
//!
//! A [`TaskControl`] is shared between the worker and whoever owns the task. The
//! owner flips the cancel flag or changes the rate; the worker polls the flag at
//! every step boundary and sleeps between steps on a condition variable. Both
//! owner-side operations notify the condition variable, so a sleeping worker
//! wakes immediately to honor a cancel or to recompute its deadline under a new
//! rate instead of finishing a stale sleep.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use serde::{Deserialize, Serialize};

use crate::errors::SortvizError;

/// Default pacing, matching the speed control's initial position.
pub const DEFAULT_STEPS_PER_SECOND: NonZeroU32 = NonZeroU32::new(30).unwrap();

/// How fast a worker may advance visible steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepRate {
    /// No pacing: the worker runs as fast as it can.
    Unlimited,
    /// At most this many visible steps per second.
    PerSecond(NonZeroU32),
}

impl StepRate {
    /// Returns a paced rate.
    ///
    /// # Errors
    ///
    /// Returns [`SortvizError::InvalidParameter`] for a rate of zero.
    pub fn per_second(steps: u32) -> Result<Self, SortvizError> {
        NonZeroU32::new(steps)
            .map(Self::PerSecond)
            .ok_or_else(|| SortvizError::invalid_parameter("rate", "must be at least 1 step/s"))
    }

    /// Minimum time between two visible steps, or `None` when unpaced.
    #[must_use]
    pub fn interval(self) -> Option<Duration> {
        match self {
            Self::Unlimited => None,
            Self::PerSecond(steps) => Some(Duration::from_secs(1) / steps.get()),
        }
    }

    /// Steps per second, or `None` when unpaced.
    #[must_use]
    pub fn steps_per_second(self) -> Option<u32> {
        match self {
            Self::Unlimited => None,
            Self::PerSecond(steps) => Some(steps.get()),
        }
    }

    /// Human-readable form for log messages, e.g. `30 steps/s`.
    #[must_use]
    pub fn describe(self) -> String {
        match self {
            Self::Unlimited => "unlimited".to_string(),
            Self::PerSecond(steps) => format!("{steps} steps/s"),
        }
    }

    /// Packs the rate into a `u32` where zero means unlimited.
    fn to_raw(self) -> u32 {
        self.steps_per_second().unwrap_or(0)
    }

    fn from_raw(raw: u32) -> Self {
        NonZeroU32::new(raw).map_or(Self::Unlimited, Self::PerSecond)
    }
}

impl Default for StepRate {
    fn default() -> Self {
        Self::PerSecond(DEFAULT_STEPS_PER_SECOND)
    }
}

/// Formats as the same text [`StepRate::from_str`] accepts.
impl fmt::Display for StepRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => write!(f, "unlimited"),
            Self::PerSecond(steps) => write!(f, "{steps}"),
        }
    }
}

impl FromStr for StepRate {
    type Err = SortvizError;

    /// Parses `unlimited` or a positive integer number of steps per second.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unlimited") {
            return Ok(Self::Unlimited);
        }
        let steps: u32 = s.parse().map_err(|_| {
            SortvizError::invalid_parameter(
                "rate",
                format!("expected a number or 'unlimited', got '{s}'"),
            )
        })?;
        Self::per_second(steps)
    }
}

/// Shared cancel flag, live rate setting and wake-up signal for one task.
#[derive(Debug)]
pub struct TaskControl {
    cancelled: AtomicBool,
    rate: AtomicU32,
    gate: Mutex<()>,
    wake: Condvar,
}

impl TaskControl {
    #[must_use]
    pub fn new(rate: StepRate) -> Self {
        Self {
            cancelled: AtomicBool::new(false),
            rate: AtomicU32::new(rate.to_raw()),
            gate: Mutex::new(()),
            wake: Condvar::new(),
        }
    }

    /// Requests cooperative cancellation and wakes a sleeping worker.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.notify();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// The predicate algorithms poll at every step boundary.
    #[must_use]
    pub fn should_continue(&self) -> bool {
        !self.is_cancelled()
    }

    /// Changes the rate; a sleeping worker re-evaluates its deadline right away.
    pub fn set_rate(&self, rate: StepRate) {
        self.rate.store(rate.to_raw(), Ordering::Release);
        self.notify();
    }

    #[must_use]
    pub fn rate(&self) -> StepRate {
        StepRate::from_raw(self.rate.load(Ordering::Acquire))
    }

    /// Blocks until the next step is due, measured from `last_step`.
    ///
    /// The rate is re-read on every wake-up, so a rate change takes effect for the
    /// step currently being waited on. Returns `false` as soon as cancellation is
    /// observed and `true` once the step may proceed.
    pub fn wait_for_step(&self, last_step: Instant) -> bool {
        if !self.should_continue() {
            return false;
        }
        if self.rate() == StepRate::Unlimited {
            return true;
        }
        let mut guard = self.gate.lock();
        loop {
            if !self.should_continue() {
                return false;
            }
            let Some(interval) = self.rate().interval() else {
                return true;
            };
            let deadline = last_step + interval;
            if Instant::now() >= deadline {
                return true;
            }
            self.wake.wait_until(&mut guard, deadline);
        }
    }

    // Taking the gate orders the flag store before the waiter's re-check, so a
    // notification can't slip in between the check and the wait.
    fn notify(&self) {
        let _guard = self.gate.lock();
        self.wake.notify_all();
    }
}

impl Default for TaskControl {
    fn default() -> Self {
        Self::new(StepRate::default())
    }
}
