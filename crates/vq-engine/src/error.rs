use thiserror::Error;
use vq_core::{CoreError, CustomerId, SimTime};
use vq_events::EventKind;
use vq_stats::StatsError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("event queue empty at {at} while the run was still active")]
    EmptyQueue { at: SimTime },

    #[error("{customer} must wait but no {kind} event is queued")]
    NoWakeTarget { customer: CustomerId, kind: EventKind },

    #[error("end of service for {0}, who is not in service")]
    NotInService(CustomerId),

    #[error("{0} completed service but has no recorded arrival")]
    MissingHistory(CustomerId),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("run statistics: {0}")]
    Stats(#[from] StatsError),
}

pub type EngineResult<T> = Result<T, EngineError>;
