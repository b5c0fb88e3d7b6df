//! `vq-core`: foundational types for the `rust_vq` on/off-server queue
//! simulator.
//!
//! This crate is a dependency of every other `vq-*` crate.  It has no `vq-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`ids`]      | `CustomerId`, `RepetitionId`                               |
//! | [`time`]     | `SimTime`, `TimeBudget`, `RunLimits`                       |
//! | [`rng`]      | `VariateSource`, `ExpVariates`, `SeedStream`               |
//! | [`params`]   | `Params` (one parameter combination), `Variant`, `Recovery` |
//! | [`config`]   | `SweepConfig` and its JSON loader                          |
//! | [`error`]    | `CoreError`, `CoreResult`                                  |

pub mod config;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SweepConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{CustomerId, RepetitionId};
pub use params::{Params, Recovery, Variant};
pub use rng::{ExpVariates, SeedStream, VariateSource};
pub use time::{RunLimits, SimTime, TimeBudget};
