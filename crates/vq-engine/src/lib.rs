//! `vq-engine`: the discrete-event engine for one repetition.
//!
//! # Event loop
//!
//! ```text
//! seed: ServerOff @ on_duration()          (vacation variants only)
//!       Arrival   @ 0 for customer 1
//! until time budget spent or events_limit customers served:
//!   pop earliest event, record it in the history, then
//!   Arrival      → sample state; serve or queue + Waiting; next Arrival
//!   Waiting      → serve if a slot is free, else Waiting again
//!   EndOfService → complete if the server is on, else reschedule by policy
//!   ServerOff    → running = false; ServerOn  @ now + off_duration()
//!   ServerOn     → running = true;  ServerOff @ now + on_duration()
//! ```
//!
//! A `Waiting` event is a wake-up, not a timeout: it is scheduled for the
//! earliest moment a slot could free up (the next `EndOfService` while the
//! server is on, the next `ServerOn` while it is off).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vq_core::{Params, RunLimits, Variant};
//! use vq_engine::{EngineBuilder, NoopObserver};
//!
//! let mut engine = EngineBuilder::from_seed(params, 42, Variant::A)?
//!     .limits(RunLimits::default())
//!     .build()?;
//! let summary = engine.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod policy;


pub use builder::EngineBuilder;
pub use engine::{Completion, Engine, EngineState};
pub use error::{EngineError, EngineResult};
pub use metrics::{Metric, MetricValues, RunSummary};
pub use observer::{EngineObserver, NoopObserver, TracingObserver};
pub use policy::ServiceSegment;
