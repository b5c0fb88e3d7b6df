//! `vq-sweep`: repeat runs, reduce them to statistics, and sweep the
//! parameter grid.
//!
//! # Crate layout
//!
//! | Module            | Contents                                           |
//! |-------------------|----------------------------------------------------|
//! | [`orchestrator`]  | `RunOrchestrator`: N seeded runs → one result      |
//! | [`sweep`]         | `SweepDriver`: every combination, optionally rayon |
//! | [`result`]        | `CombinationResult`, `MetricIntervals`             |
//! | [`error`]         | `SweepError`, `SweepResult`                        |
//!
//! # Determinism
//!
//! Combination `i` of the product draws its repetition seeds from
//! `SeedStream::new(config.seed, i)`.  No state is shared between
//! combinations, so the parallel and sequential paths produce the same
//! seeds, and under a simulated-time budget the same results.

pub mod error;
pub mod orchestrator;
pub mod result;
pub mod sweep;


pub use error::{SweepError, SweepResult};
pub use orchestrator::RunOrchestrator;
pub use result::{CombinationResult, MetricIntervals};
pub use sweep::SweepDriver;
