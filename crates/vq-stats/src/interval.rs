//! Two-sided confidence intervals for a sample mean.

use std::fmt;

use serde::Serialize;

use crate::quantile::{student_t_quantile, z_for_confidence};
use crate::{SampleSummary, StatsResult};

/// Sample size from which the normal approximation replaces Student-t.
pub const NORMAL_APPROX_MIN_SAMPLES: usize = 30;

/// The confidence levels reported for every measured metric.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ConfidenceLevel {
    P95,
    P99,
}

impl ConfidenceLevel {
    pub const ALL: [ConfidenceLevel; 2] = [ConfidenceLevel::P95, ConfidenceLevel::P99];

    pub fn value(self) -> f64 {
        match self {
            ConfidenceLevel::P95 => 0.95,
            ConfidenceLevel::P99 => 0.99,
        }
    }

    /// Key used in exported records: `"0.95"`, `"0.99"`.
    pub fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::P95 => "0.95",
            ConfidenceLevel::P99 => "0.99",
        }
    }

    /// Short form for column names: `ci95`, `ci99`.
    pub fn short(self) -> &'static str {
        match self {
            ConfidenceLevel::P95 => "ci95",
            ConfidenceLevel::P99 => "ci99",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which critical value an interval was built with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum IntervalMethod {
    StudentT { df: usize },
    Normal,
}

impl IntervalMethod {
    /// The method the interval rule picks for `n` samples (n ≥ 2).
    pub fn for_sample_size(n: usize) -> Self {
        if n >= NORMAL_APPROX_MIN_SAMPLES {
            IntervalMethod::Normal
        } else {
            IntervalMethod::StudentT { df: n.saturating_sub(1) }
        }
    }

    /// Two-sided critical value for `level`.
    pub fn critical_value(self, level: ConfidenceLevel) -> StatsResult<f64> {
        match self {
            IntervalMethod::Normal => z_for_confidence(level.value()),
            IntervalMethod::StudentT { df } => {
                student_t_quantile(0.5 + level.value() / 2.0, df)
            }
        }
    }
}

/// `mean ± critical · std_err`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub level:  ConfidenceLevel,
    pub method: IntervalMethod,
    pub mean:   f64,
    pub low:    f64,
    pub high:   f64,
}

impl ConfidenceInterval {
    /// Build the interval for an already summarised sample.
    pub fn from_summary(summary: &SampleSummary, level: ConfidenceLevel) -> StatsResult<Self> {
        let method = IntervalMethod::for_sample_size(summary.n);
        let half = method.critical_value(level)? * summary.std_err;
        Ok(Self {
            level,
            method,
            mean: summary.mean,
            low:  summary.mean - half,
            high: summary.mean + half,
        })
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    pub fn as_pair(&self) -> (f64, f64) {
        (self.low, self.high)
    }
}

/// Summarise `samples` and build the interval at `level`.
///
/// Fails with `InsufficientSamples` for fewer than two values.
pub fn confidence_interval(samples: &[f64], level: ConfidenceLevel) -> StatsResult<ConfidenceInterval> {
    let summary = SampleSummary::from_samples(samples)?;
    ConfidenceInterval::from_summary(&summary, level)
}
