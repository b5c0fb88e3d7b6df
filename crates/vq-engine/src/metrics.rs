//! Per-run metrics: the closed metric set, measured values, and the
//! closed-form values they are compared against.

use std::fmt;

use serde::Serialize;

use vq_core::{Params, SimTime, Variant};
use vq_events::{CustomerRecord, EventKind};

// ── Metric ───────────────────────────────────────────────────────────────────

/// Every quantity a run can report.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    MeanServiceTime,
    MeanSystemTime,
    MeanClientsInQueue,
    MeanClientsInSystem,
    ServerEmptyProb,
    ServerOnProb,
    ServerOffProb,
}

impl Metric {
    pub const COUNT: usize = 7;

    pub const ALL: [Metric; Metric::COUNT] = [
        Metric::MeanServiceTime,
        Metric::MeanSystemTime,
        Metric::MeanClientsInQueue,
        Metric::MeanClientsInSystem,
        Metric::ServerEmptyProb,
        Metric::ServerOnProb,
        Metric::ServerOffProb,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Name of the measured value, e.g. `mean_system_time`.
    pub fn name(self) -> &'static str {
        match self {
            Metric::MeanServiceTime => "mean_service_time",
            Metric::MeanSystemTime => "mean_system_time",
            Metric::MeanClientsInQueue => "mean_clients_in_queue",
            Metric::MeanClientsInSystem => "mean_clients_in_system",
            Metric::ServerEmptyProb => "server_empty_prob",
            Metric::ServerOnProb => "server_on_prob",
            Metric::ServerOffProb => "server_off_prob",
        }
    }

    /// Name of the closed-form companion, e.g. `real_mean_system_time`.
    pub fn real_name(self) -> &'static str {
        match self {
            Metric::MeanServiceTime => "real_mean_service_time",
            Metric::MeanSystemTime => "real_mean_system_time",
            Metric::MeanClientsInQueue => "real_mean_clients_in_queue",
            Metric::MeanClientsInSystem => "real_mean_clients_in_system",
            Metric::ServerEmptyProb => "real_server_empty_prob",
            Metric::ServerOnProb => "real_server_on_prob",
            Metric::ServerOffProb => "real_server_off_prob",
        }
    }

    /// Key of the metric's confidence intervals: the name without `mean_`.
    pub fn interval_key(self) -> &'static str {
        let name = self.name();
        name.strip_prefix("mean_").unwrap_or(name)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── MetricValues ─────────────────────────────────────────────────────────────

/// One optional value per [`Metric`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MetricValues([Option<f64>; Metric::COUNT]);

impl MetricValues {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.0[metric.index()]
    }

    #[inline]
    pub fn set(&mut self, metric: Metric, value: f64) {
        self.0[metric.index()] = Some(value);
    }

    /// Builder-style `set`.
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.set(metric, value);
        self
    }

    /// Present values in `Metric::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL
            .into_iter()
            .filter_map(|m| self.get(m).map(|v| (m, v)))
    }

    pub fn len(&self) -> usize {
        self.0.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── RunSummary ───────────────────────────────────────────────────────────────

/// Everything one run reports to the orchestrator.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub measured:      MetricValues,
    pub theoretical:   MetricValues,
    /// Customers whose service completed.
    pub served:        u64,
    /// Customers that arrived (including those still queued or in service).
    pub arrivals:      u64,
    /// Services that found the server off when they were due to end.
    pub interruptions: u64,
    /// Events processed by the loop.
    pub events:        u64,
    /// Simulated time of the last processed event.
    pub end_time:      SimTime,
}

// ── Per-arrival state samples ────────────────────────────────────────────────

/// Running sums of the system state seen by each arrival.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct StateSamples {
    pub count:     u64,
    in_system:     f64,
    in_queue:      f64,
    busy_fraction: f64,
}

impl StateSamples {
    pub fn record(&mut self, queued: u64, busy: u32, servers: u32) {
        self.count += 1;
        self.in_system += (queued + busy as u64) as f64;
        self.in_queue += queued as f64;
        self.busy_fraction += busy as f64 / servers as f64;
    }

    /// `(mean in system, mean in queue, mean busy fraction)`, or `None`
    /// before the first arrival.
    pub fn means(&self) -> Option<(f64, f64, f64)> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some((self.in_system / n, self.in_queue / n, self.busy_fraction / n))
    }
}

// ── Server availability ──────────────────────────────────────────────────────

/// `(P(on), P(off))` from the server's on/off log.
///
/// The run starts with the server on at time zero.  On periods run from the
/// start (or a `ServerOn`) to the next `ServerOff`; off periods from a
/// `ServerOff` to the next `ServerOn`.  A trailing `ServerOff` with no
/// matching `ServerOn` is dropped.  `None` until at least one full off→on
/// cycle has been recorded.
pub fn on_off_fractions(server: &CustomerRecord) -> Option<(f64, f64)> {
    let offs = server.times(EventKind::ServerOff);
    let ons = server.times(EventKind::ServerOn);
    let cycles = offs.len().min(ons.len());
    if cycles == 0 {
        return None;
    }
    let (offs, ons) = (&offs[..cycles], &ons[..cycles]);

    let off_total: f64 = offs.iter().zip(ons).map(|(&off, &on)| on - off).sum();
    let on_total: f64 = (offs[0] - SimTime::ZERO)
        + offs[1..].iter().zip(ons).map(|(&off, &on)| off - on).sum::<f64>();

    let total = on_total + off_total;
    if !(total > 0.0) {
        return None;
    }
    Some((on_total / total, off_total / total))
}

// ── Closed-form values ───────────────────────────────────────────────────────

/// Closed-form companions for `params` under `variant`.
///
/// Queueing formulas are single-server and only exist for a stable system,
/// so they are omitted for `servers > 1` or utilisation ≥ 1.
pub fn theoretical(params: &Params, variant: Variant) -> MetricValues {
    let mut real = MetricValues::new().with(Metric::MeanServiceTime, 1.0 / params.mi);
    let single = params.servers == 1;
    let rho = params.rho();

    if variant.has_vacations() {
        let (p_on, p_off) = (params.p_on(), params.p_off());
        real.set(Metric::ServerOnProb, p_on);
        real.set(Metric::ServerOffProb, p_off);

        let rho_eff = rho / p_on;
        if single && rho_eff < 1.0 {
            let system = (rho_eff + params.lam * params.off_mean * p_off)
                / (1.0 - rho_eff)
                / params.lam;
            real.set(Metric::MeanSystemTime, system);
        }
    } else if single && rho < 1.0 {
        real.set(Metric::MeanSystemTime, 1.0 / (params.mi - params.lam));
        real.set(Metric::MeanClientsInSystem, rho / (1.0 - rho));
        real.set(Metric::MeanClientsInQueue, rho * rho / (1.0 - rho));
        real.set(Metric::ServerEmptyProb, 1.0 - rho);
    }
    real
}
