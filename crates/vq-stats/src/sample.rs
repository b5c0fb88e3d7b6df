//! Sample mean, variance and standard error.

use serde::Serialize;

use crate::{StatsError, StatsResult};

/// Arithmetic mean of at least one finite value.
pub fn mean(samples: &[f64]) -> StatsResult<f64> {
    check(samples, "mean", 1)?;
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Moments of a sample of size ≥ 2.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SampleSummary {
    pub n:        usize,
    pub mean:     f64,
    /// Unbiased sample variance (divisor n − 1).
    pub variance: f64,
    /// Standard error of the mean, √(variance / n).
    pub std_err:  f64,
}

impl SampleSummary {
    /// Summarise `samples`.  Needs at least two finite values.
    pub fn from_samples(samples: &[f64]) -> StatsResult<Self> {
        check(samples, "sample variance", 2)?;
        let n = samples.len();
        let mean = samples.iter().sum::<f64>() / n as f64;
        // Two-pass variance.
        let ss: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();
        let variance = ss / (n - 1) as f64;
        Ok(Self {
            n,
            mean,
            variance,
            std_err: (variance / n as f64).sqrt(),
        })
    }
}

fn check(samples: &[f64], what: &'static str, needed: usize) -> StatsResult<()> {
    if samples.len() < needed {
        return Err(StatsError::InsufficientSamples { what, needed, got: samples.len() });
    }
    if let Some(&bad) = samples.iter().find(|x| !x.is_finite()) {
        return Err(StatsError::NonFinite(bad));
    }
    Ok(())
}
