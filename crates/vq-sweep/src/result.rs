//! The reduced outcome of one parameter combination.

use serde::Serialize;

use vq_core::{Params, Variant};
use vq_engine::{Metric, MetricValues};
use vq_stats::{ConfidenceInterval, ConfidenceLevel};

/// Both confidence intervals of one metric.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct MetricIntervals {
    pub p95: ConfidenceInterval,
    pub p99: ConfidenceInterval,
}

impl MetricIntervals {
    pub fn get(&self, level: ConfidenceLevel) -> &ConfidenceInterval {
        match level {
            ConfidenceLevel::P95 => &self.p95,
            ConfidenceLevel::P99 => &self.p99,
        }
    }
}

/// Statistics over the N repetitions of one combination.
#[derive(Clone, Debug, PartialEq)]
pub struct CombinationResult {
    /// Position in the sweep's product order.
    pub index:         usize,
    pub params:        Params,
    pub variant:       Variant,
    pub repetitions:   usize,
    /// Sample mean of every measured metric present in all runs.
    pub means:         MetricValues,
    /// Mean of the closed-form companions present in all runs.
    pub theoretical:   MetricValues,
    /// Completed services summed over all runs.
    pub served:        u64,
    pub interruptions: u64,
    pub(crate) intervals: [Option<MetricIntervals>; Metric::COUNT],
}

impl CombinationResult {
    /// Utilisation λ / μ.
    pub fn rho(&self) -> f64 {
        self.params.rho()
    }

    pub fn intervals(&self, metric: Metric) -> Option<&MetricIntervals> {
        self.intervals[metric.index()].as_ref()
    }

    pub fn interval(&self, metric: Metric, level: ConfidenceLevel) -> Option<&ConfidenceInterval> {
        self.intervals(metric).map(|i| i.get(level))
    }

    /// Metrics that have intervals, in `Metric::ALL` order.
    pub fn interval_metrics(&self) -> impl Iterator<Item = (Metric, &MetricIntervals)> + '_ {
        Metric::ALL
            .into_iter()
            .filter_map(|m| self.intervals(m).map(|i| (m, i)))
    }
}
