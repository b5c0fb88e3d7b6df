//! Repeated runs of one combination, reduced to means and intervals.

use tracing::{debug, info};

use vq_core::{Params, RepetitionId, RunLimits, SeedStream, SweepConfig, Variant};
use vq_engine::{EngineBuilder, EngineObserver, Metric, MetricValues, RunSummary};
use vq_stats::{ConfidenceLevel, StatsError, confidence_interval, mean};

use crate::{CombinationResult, MetricIntervals, SweepResult};

/// Runs the repetitions of a parameter combination.
#[derive(Copy, Clone, Debug)]
pub struct RunOrchestrator {
    variant:     Variant,
    limits:      RunLimits,
    repetitions: usize,
}

impl RunOrchestrator {
    pub fn new(variant: Variant, limits: RunLimits, repetitions: usize) -> Self {
        Self { variant, limits, repetitions }
    }

    pub fn from_config(config: &SweepConfig) -> Self {
        Self::new(config.variant, config.run_limits(), config.simulation_repetitions)
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Run every repetition of `params` and reduce the summaries.
    ///
    /// Each repetition gets a fresh engine seeded from `seeds`.  Fails with
    /// [`StatsError::InsufficientSamples`] before anything runs when fewer
    /// than two repetitions are configured.
    pub fn run<O: EngineObserver>(
        &self,
        index:    usize,
        params:   Params,
        seeds:    &mut SeedStream,
        observer: &mut O,
    ) -> SweepResult<CombinationResult> {
        check_repetitions(self.repetitions)?;

        let mut summaries = Vec::with_capacity(self.repetitions);
        for rep in 0..self.repetitions {
            let seed = seeds.next_seed()?;
            let repetition = RepetitionId(rep as u32);
            observer.on_repetition(repetition, seed);

            let mut engine = EngineBuilder::from_seed(params, seed, self.variant)?
                .limits(self.limits)
                .build()?;
            let summary = engine.run(observer)?;
            debug!(%repetition, seed, served = summary.served, "repetition done");
            summaries.push(summary);
        }

        let result = reduce(index, params, self.variant, &summaries)?;
        info!(
            index,
            %params,
            repetitions = result.repetitions,
            served      = result.served,
            "combination done"
        );
        Ok(result)
    }
}

fn check_repetitions(n: usize) -> SweepResult<()> {
    if n < 2 {
        return Err(StatsError::InsufficientSamples { what: "repetitions", needed: 2, got: n }.into());
    }
    Ok(())
}

/// Reduce run summaries to one [`CombinationResult`].
///
/// A metric is reported only when every run produced it.  Intervals are
/// computed for measured metrics only.
pub fn reduce(
    index:     usize,
    params:    Params,
    variant:   Variant,
    summaries: &[RunSummary],
) -> SweepResult<CombinationResult> {
    check_repetitions(summaries.len())?;

    let mut means = MetricValues::new();
    let mut theoretical = MetricValues::new();
    let mut intervals = [None; Metric::COUNT];

    for metric in Metric::ALL {
        if let Some(samples) = collect(summaries, |s| s.measured.get(metric)) {
            means.set(metric, mean(&samples)?);
            intervals[metric.index()] = Some(MetricIntervals {
                p95: confidence_interval(&samples, ConfidenceLevel::P95)?,
                p99: confidence_interval(&samples, ConfidenceLevel::P99)?,
            });
        }
        if let Some(values) = collect(summaries, |s| s.theoretical.get(metric)) {
            theoretical.set(metric, mean(&values)?);
        }
    }

    Ok(CombinationResult {
        index,
        params,
        variant,
        repetitions: summaries.len(),
        means,
        theoretical,
        served: summaries.iter().map(|s| s.served).sum(),
        interruptions: summaries.iter().map(|s| s.interruptions).sum(),
        intervals,
    })
}

/// One value per summary, or `None` if any summary lacks it.
fn collect<F>(summaries: &[RunSummary], value: F) -> Option<Vec<f64>>
where
    F: Fn(&RunSummary) -> Option<f64>,
{
    summaries.iter().map(value).collect()
}
