use thiserror::Error;
use vq_core::{CoreError, Params};
use vq_engine::EngineError;
use vq_stats::StatsError;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("statistics error: {0}")]
    Stats(#[from] StatsError),

    #[error("combination {index} ({params}): {source}")]
    Combination {
        index:  usize,
        params: Params,
        #[source]
        source: Box<SweepError>,
    },
}

pub type SweepResult<T> = Result<T, SweepError>;
