//! Core error type.
//!
//! Downstream crates wrap `CoreError` as one variant of their own error enums
//! via `#[from]`.

use thiserror::Error;

/// The error type for `vq-core` and a common base for the other crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid distribution parameter {name} = {value} (must be finite and > 0)")]
    Distribution { name: &'static str, value: f64 },

    #[error("seed stream for combination {combination} produced repeated seed {seed}")]
    RepeatedSeed { combination: usize, seed: u64 },
}

/// Shorthand result type for `vq-core`.
pub type CoreResult<T> = Result<T, CoreError>;
