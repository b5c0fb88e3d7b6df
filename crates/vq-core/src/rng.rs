//! Deterministic variate sources and per-combination seed streams.
//!
//! # Determinism strategy
//!
//! The sweep has one root seed.  Each parameter combination derives its own
//! [`SeedStream`] from
//!
//!   seed = root_seed XOR ((combination_index + 1) * MIXING_CONSTANT)
//!
//! and every repetition of that combination draws its engine seed from the
//! stream.  The mixing constant is the 64-bit fractional part of the golden
//! ratio, which spreads consecutive indices across the seed space.  Because a
//! combination never reads another combination's stream, results do not
//! depend on the order in which worker threads pick up combinations.
//!
//! Inside a repetition, each of the four variate kinds reads its own
//! generator seeded from the engine seed mixed with a per-kind constant.  The
//! i-th on period is therefore the same number under every variant run with
//! that seed, however differently the variants interleave their draws.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};
use rustc_hash::FxHashSet;

use crate::params::positive;
use crate::{CoreError, CoreResult, Params};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-kind salts for the variate streams of one repetition.
const INTERARRIVAL_STREAM: u64 = 0x243f_6a88_85a3_08d3;
const SERVICE_STREAM: u64 = 0x1319_8a2e_0370_7344;
const ON_STREAM: u64 = 0xa409_3822_299f_31d0;
const OFF_STREAM: u64 = 0x082e_fa98_ec4e_6c89;

// ── VariateSource ────────────────────────────────────────────────────────────

/// Supplies the four random durations the engine consumes.
///
/// The production implementation is [`ExpVariates`]; tests substitute
/// scripted sources to force exact schedules.
pub trait VariateSource {
    /// Time until the next arrival.
    fn interarrival_time(&mut self) -> f64;

    /// Length of one service.
    fn service_time(&mut self) -> f64;

    /// Length of an on period.
    fn on_duration(&mut self) -> f64;

    /// Length of an off (vacation) period.
    fn off_duration(&mut self) -> f64;
}

impl<V: VariateSource + ?Sized> VariateSource for &mut V {
    fn interarrival_time(&mut self) -> f64 {
        (**self).interarrival_time()
    }
    fn service_time(&mut self) -> f64 {
        (**self).service_time()
    }
    fn on_duration(&mut self) -> f64 {
        (**self).on_duration()
    }
    fn off_duration(&mut self) -> f64 {
        (**self).off_duration()
    }
}

// ── ExpVariates ──────────────────────────────────────────────────────────────

/// A distribution bound to its own generator.
struct Stream {
    rng:  SmallRng,
    dist: Exp<f64>,
}

impl Stream {
    fn new(seed: u64, salt: u64, dist: Exp<f64>) -> Self {
        let mixed = salt.wrapping_mul(MIXING_CONSTANT);
        Self { rng: SmallRng::seed_from_u64(seed ^ mixed), dist }
    }

    #[inline]
    fn draw(&mut self) -> f64 {
        self.dist.sample(&mut self.rng)
    }
}

/// Exponential variates for one repetition, one seeded `SmallRng` per kind.
pub struct ExpVariates {
    interarrival: Stream,
    service:      Stream,
    /// `(on, off)` streams; `None` for the no-vacation engine.
    vacation:     Option<(Stream, Stream)>,
}

impl ExpVariates {
    /// Build the distributions for `params` and seed the four streams.
    ///
    /// On/off streams are only built when `vacations` is set.
    pub fn new(seed: u64, params: &Params, vacations: bool) -> CoreResult<Self> {
        let interarrival = Stream::new(seed, INTERARRIVAL_STREAM, exp_with_rate("lam", params.lam)?);
        let service = Stream::new(seed, SERVICE_STREAM, exp_with_rate("mi", params.mi)?);
        let vacation = if vacations {
            Some((
                Stream::new(seed, ON_STREAM, exp_with_mean("on_mean", params.on_mean)?),
                Stream::new(seed, OFF_STREAM, exp_with_mean("off_mean", params.off_mean)?),
            ))
        } else {
            None
        };
        Ok(Self { interarrival, service, vacation })
    }
}

impl VariateSource for ExpVariates {
    #[inline]
    fn interarrival_time(&mut self) -> f64 {
        self.interarrival.draw()
    }

    #[inline]
    fn service_time(&mut self) -> f64 {
        self.service.draw()
    }

    /// Infinite when vacations are disabled: the server never goes off.
    #[inline]
    fn on_duration(&mut self) -> f64 {
        match &mut self.vacation {
            Some((on, _)) => on.draw(),
            None => f64::INFINITY,
        }
    }

    #[inline]
    fn off_duration(&mut self) -> f64 {
        match &mut self.vacation {
            Some((_, off)) => off.draw(),
            None => 0.0,
        }
    }
}

fn exp_with_rate(name: &'static str, rate: f64) -> CoreResult<Exp<f64>> {
    positive(name, rate)?;
    Exp::new(rate).map_err(|_| CoreError::Distribution { name, value: rate })
}

fn exp_with_mean(name: &'static str, mean: f64) -> CoreResult<Exp<f64>> {
    positive(name, mean)?;
    exp_with_rate(name, 1.0 / mean)
}

// ── SeedStream ───────────────────────────────────────────────────────────────

/// Source of engine seeds for the repetitions of one parameter combination.
///
/// A seed is never handed out twice: a repeat is reported as
/// [`CoreError::RepeatedSeed`] and the combination must be aborted.
pub struct SeedStream {
    rng:         SmallRng,
    combination: usize,
    issued:      FxHashSet<u64>,
}

impl SeedStream {
    /// Derive the stream for combination `combination` from the sweep's root
    /// seed.
    pub fn new(root_seed: u64, combination: usize) -> Self {
        let mixed = (combination as u64).wrapping_add(1).wrapping_mul(MIXING_CONSTANT);
        Self {
            rng: SmallRng::seed_from_u64(root_seed ^ mixed),
            combination,
            issued: FxHashSet::default(),
        }
    }

    /// Draw the seed for the next repetition.
    pub fn next_seed(&mut self) -> CoreResult<u64> {
        let seed: u64 = self.rng.r#gen();
        if !self.issued.insert(seed) {
            return Err(CoreError::RepeatedSeed { combination: self.combination, seed });
        }
        Ok(seed)
    }

    /// Number of seeds handed out so far.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }
}
