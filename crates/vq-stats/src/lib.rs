//! `vq-stats`: reduce repeated measurements to point estimates and
//! confidence intervals.
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`sample`]     | `mean`, `SampleSummary` (mean, variance, std. error)  |
//! | [`quantile`]   | normal and Student-t CDF / inverse CDF                |
//! | [`interval`]   | `ConfidenceLevel`, `ConfidenceInterval`, method rule  |
//! | [`error`]      | `StatsError`, `StatsResult`                           |
//!
//! # Interval rule
//!
//! ```text
//! n < 30   →  mean ± t(1 − α/2, df = n − 1) · s/√n
//! n ≥ 30   →  mean ± z(1 − α/2)             · s/√n
//! ```
//!
//! Fewer than two samples have no sample variance; every entry point that
//! needs one returns [`StatsError::InsufficientSamples`] instead of NaN.

pub mod error;
pub mod interval;
pub mod quantile;
pub mod sample;

#[cfg(test)]
mod tests;

pub use error::{StatsError, StatsResult};
pub use interval::{
    ConfidenceInterval, ConfidenceLevel, IntervalMethod, NORMAL_APPROX_MIN_SAMPLES,
    confidence_interval,
};
pub use quantile::{inv_norm_cdf, student_t_cdf, student_t_quantile, z_for_confidence};
pub use sample::{SampleSummary, mean};
