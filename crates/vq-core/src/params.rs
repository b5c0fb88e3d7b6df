//! One parameter combination of the sweep, and the engine variant selector.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

// ── Variant ──────────────────────────────────────────────────────────────────

/// Which engine to run.
///
/// Parsed from the `variant` configuration string: `"A"` and `"B"` select the
/// vacation engine with the matching recovery policy, anything else selects
/// the engine without vacations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Variant {
    /// Vacations; an interrupted service resumes with its remaining portion.
    #[default]
    A,
    /// Vacations; an interrupted service restarts from scratch.
    B,
    /// The server never takes a vacation (plain M/M/c baseline).
    NoVacation,
}

impl Variant {
    /// Recovery policy for interrupted services, or `None` if the server
    /// never goes off.
    pub fn recovery(self) -> Option<Recovery> {
        match self {
            Variant::A => Some(Recovery::Resume),
            Variant::B => Some(Recovery::Restart),
            Variant::NoVacation => None,
        }
    }

    pub fn has_vacations(self) -> bool {
        self.recovery().is_some()
    }
}

impl From<String> for Variant {
    fn from(s: String) -> Self {
        match s.trim() {
            "A" => Variant::A,
            "B" => Variant::B,
            _ => Variant::NoVacation,
        }
    }
}

impl From<Variant> for String {
    fn from(v: Variant) -> String {
        v.to_string()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::A => f.write_str("A"),
            Variant::B => f.write_str("B"),
            Variant::NoVacation => f.write_str("none"),
        }
    }
}

// ── Recovery ─────────────────────────────────────────────────────────────────

/// What happens to a service that was in progress when the server went off.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Recovery {
    /// Finish the unfinished portion after the vacation (variant A).
    Resume,
    /// Discard progress and repeat the whole service after the vacation
    /// (variant B).
    Restart,
}

// ── Params ───────────────────────────────────────────────────────────────────

/// One point of the parameter sweep.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Service rate μ.
    pub mi: f64,
    /// Arrival rate λ.
    pub lam: f64,
    /// Mean length of an on period.
    pub on_mean: f64,
    /// Mean length of an off (vacation) period.
    pub off_mean: f64,
    /// Number of customers that can be in service at once.
    pub servers: u32,
}

impl Params {
    /// Utilisation ρ = λ / μ.
    #[inline]
    pub fn rho(&self) -> f64 {
        self.lam / self.mi
    }

    /// Long-run fraction of time the server is on: on / (on + off).
    #[inline]
    pub fn p_on(&self) -> f64 {
        self.on_mean / (self.on_mean + self.off_mean)
    }

    #[inline]
    pub fn p_off(&self) -> f64 {
        self.off_mean / (self.on_mean + self.off_mean)
    }

    /// Reject parameters no exponential distribution can be built from.
    ///
    /// On/off means are only checked when `vacations` is set; the
    /// no-vacation engine never draws them.
    pub fn validate(&self, vacations: bool) -> CoreResult<()> {
        positive("mi", self.mi)?;
        positive("lam", self.lam)?;
        if vacations {
            positive("on_mean", self.on_mean)?;
            positive("off_mean", self.off_mean)?;
        }
        if self.servers == 0 {
            return Err(CoreError::Config("server count must be at least 1".into()));
        }
        Ok(())
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mi={} lam={} on={} off={} servers={}",
            self.mi, self.lam, self.on_mean, self.off_mean, self.servers
        )
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> CoreResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::Distribution { name, value })
    }
}
