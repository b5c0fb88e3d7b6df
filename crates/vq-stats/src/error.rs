use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("insufficient samples for {what}: need at least {needed}, got {got}")]
    InsufficientSamples {
        what:   &'static str,
        needed: usize,
        got:    usize,
    },

    #[error("non-finite sample value {0}")]
    NonFinite(f64),

    #[error("probability {0} outside (0, 1)")]
    Probability(f64),

    #[error("degrees of freedom must be at least 1")]
    DegreesOfFreedom,
}

pub type StatsResult<T> = Result<T, StatsError>;
