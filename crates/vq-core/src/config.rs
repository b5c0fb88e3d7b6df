//! Sweep configuration and its JSON loader.
//!
//! # JSON format
//!
//! Every key is optional; missing keys take the defaults shown.
//!
//! ```json
//! {
//!   "multithreaded": false,
//!   "mi_values": [0.6],
//!   "lam_values": [1],
//!   "on_values": [40],
//!   "off_values": [35],
//!   "server_counts": [1],
//!   "simulation_repetitions": 10,
//!   "time_limit": 10,
//!   "events_limit": 10000,
//!   "variant": "A",
//!   "seed": 123,
//!   "time_budget": "wall_clock"
//! }
//! ```
//!
//! A file that is missing, unreadable or not valid JSON is treated as "no
//! configuration": the loader logs a warning and returns
//! [`SweepConfig::default`].  Values that parse but make no sense (a
//! negative rate, an empty value list) are rejected later by
//! [`SweepConfig::validate`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{CoreError, CoreResult, Params, RunLimits, TimeBudget, Variant};

/// Top-level sweep configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Run combinations on the rayon thread pool.
    pub multithreaded: bool,

    /// Service rates μ.
    pub mi_values: Vec<f64>,

    /// Arrival rates λ.
    pub lam_values: Vec<f64>,

    /// Mean on-period lengths.
    pub on_values: Vec<f64>,

    /// Mean off-period lengths.
    pub off_values: Vec<f64>,

    /// Server capacities.
    pub server_counts: Vec<u32>,

    /// Independent repetitions per combination.
    pub simulation_repetitions: usize,

    /// Per-run time budget in seconds (see `time_budget`).
    pub time_limit: f64,

    /// Per-run limit on completed services.
    pub events_limit: u64,

    /// `"A"`, `"B"`, or anything else for the no-vacation engine.
    pub variant: Variant,

    /// Root seed for every seed stream of the sweep.
    pub seed: u64,

    /// Whether `time_limit` counts wall-clock or simulated seconds.
    pub time_budget: TimeBudget,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            multithreaded:          false,
            mi_values:              vec![0.6],
            lam_values:             vec![1.0],
            on_values:              vec![40.0],
            off_values:             vec![35.0],
            server_counts:          vec![1],
            simulation_repetitions: 10,
            time_limit:             10.0,
            events_limit:           10_000,
            variant:                Variant::A,
            seed:                   123,
            time_budget:            TimeBudget::WallClock,
        }
    }
}

impl SweepConfig {
    /// Load from a JSON file, falling back to defaults on any read or parse
    /// failure.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_json_str(&text),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "configuration unreadable, using defaults");
                Self::default()
            }
        }
    }

    /// Parse from JSON text, falling back to defaults if it is malformed.
    pub fn from_json_str(text: &str) -> Self {
        match serde_json::from_str::<SweepConfig>(text) {
            Ok(config) => {
                debug!(?config, "configuration loaded");
                config
            }
            Err(e) => {
                warn!(error = %e, "configuration malformed, using defaults");
                Self::default()
            }
        }
    }

    /// Check the values before any run starts.
    pub fn validate(&self) -> CoreResult<()> {
        let lists: [(&str, usize); 5] = [
            ("mi_values", self.mi_values.len()),
            ("lam_values", self.lam_values.len()),
            ("on_values", self.on_values.len()),
            ("off_values", self.off_values.len()),
            ("server_counts", self.server_counts.len()),
        ];
        for (name, len) in lists {
            if len == 0 {
                return Err(CoreError::Config(format!("{name} must not be empty")));
            }
        }
        if self.events_limit == 0 {
            return Err(CoreError::Config("events_limit must be at least 1".into()));
        }
        if !(self.time_limit > 0.0) {
            return Err(CoreError::Config(format!(
                "time_limit must be positive, got {}",
                self.time_limit
            )));
        }
        let vacations = self.variant.has_vacations();
        for params in self.combinations() {
            params.validate(vacations)?;
        }
        Ok(())
    }

    /// The Cartesian product of all value sets, μ outermost and server
    /// count innermost.
    pub fn combinations(&self) -> Vec<Params> {
        let mut out = Vec::with_capacity(
            self.mi_values.len()
                * self.lam_values.len()
                * self.on_values.len()
                * self.off_values.len()
                * self.server_counts.len(),
        );
        for &mi in &self.mi_values {
            for &lam in &self.lam_values {
                for &on_mean in &self.on_values {
                    for &off_mean in &self.off_values {
                        for &servers in &self.server_counts {
                            out.push(Params { mi, lam, on_mean, off_mean, servers });
                        }
                    }
                }
            }
        }
        out
    }

    /// Stopping condition applied to every run.
    pub fn run_limits(&self) -> RunLimits {
        RunLimits {
            time_limit:   self.time_limit,
            budget:       self.time_budget,
            events_limit: self.events_limit,
        }
    }
}
