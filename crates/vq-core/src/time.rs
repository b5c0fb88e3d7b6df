//! Simulation time model.
//!
//! # Design
//!
//! Simulated time is a continuous `f64` wrapped in `SimTime`.  Every run
//! starts at `SimTime::ZERO`; all event times are absolute offsets from it.
//! Exponential variates make integer ticks useless here, so unlike a
//! fixed-step clock the only arithmetic is "time plus a drawn duration" and
//! "difference of two times".
//!
//! `SimTime` is totally ordered through [`f64::total_cmp`], which lets it key
//! a `BinaryHeap` directly.  NaN never enters the model: every duration comes
//! from a validated exponential distribution.

use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute point in simulated time.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

/// Simulated time elapsed from `rhs` to `self` (negative if `rhs` is later).
impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.4}", self.0)
    }
}

// ── TimeBudget ───────────────────────────────────────────────────────────────

/// What the per-run `time_limit` measures.
///
/// `WallClock` is the historical behaviour: a run stops once the host has
/// spent `time_limit` real seconds on it, so results depend on machine speed.
/// `Simulated` stops once the simulated clock passes `time_limit`, which makes
/// a seeded run fully reproducible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBudget {
    #[default]
    WallClock,
    Simulated,
}

// ── RunLimits ────────────────────────────────────────────────────────────────

/// Stopping condition shared by every repetition of a sweep.
///
/// A run stops when the time budget is exhausted **or** `events_limit`
/// customers have completed service, whichever comes first.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunLimits {
    /// Seconds of wall-clock or simulated time, depending on `budget`.
    pub time_limit: f64,
    pub budget: TimeBudget,
    /// Number of completed services after which the run stops.
    pub events_limit: u64,
}

impl RunLimits {
    /// Wall-clock budget as a `Duration`.  Negative or non-finite limits
    /// saturate to zero and `Duration::MAX` respectively.
    pub fn wall_clock(&self) -> Duration {
        if self.time_limit.is_nan() || self.time_limit <= 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(self.time_limit).unwrap_or(Duration::MAX)
        }
    }

    /// Simulated-time horizon, if the budget is simulated.
    pub fn horizon(&self) -> Option<SimTime> {
        match self.budget {
            TimeBudget::Simulated => Some(SimTime(self.time_limit)),
            TimeBudget::WallClock => None,
        }
    }
}

impl Default for RunLimits {
    fn default() -> Self {
        Self {
            time_limit:   10.0,
            budget:       TimeBudget::WallClock,
            events_limit: 10_000,
        }
    }
}
