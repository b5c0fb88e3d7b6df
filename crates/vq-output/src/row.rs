//! Flattened and nested views of a [`CombinationResult`].

use std::collections::BTreeMap;

use serde::Serialize;

use vq_engine::Metric;
use vq_stats::ConfidenceLevel;
use vq_sweep::CombinationResult;

/// Round to three decimals for display.
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

// ── JSON record ──────────────────────────────────────────────────────────────

/// One element of `results.json`.
///
/// `simulator_mean_results` holds every measured mean under its metric name
/// and every closed-form value under its `real_` name.
/// `confidence_intervals` is keyed by metric name without the `mean_` prefix,
/// then by level (`"0.95"`, `"0.99"`), each a `[low, high]` pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResultRecord {
    pub mi:                     f64,
    pub lam:                    f64,
    pub rho:                    f64,
    pub on:                     f64,
    pub off:                    f64,
    pub servers:                u32,
    pub variant:                String,
    pub repetitions:            usize,
    pub simulator_mean_results: BTreeMap<&'static str, f64>,
    pub confidence_intervals:   BTreeMap<&'static str, BTreeMap<&'static str, (f64, f64)>>,
}

impl From<&CombinationResult> for ResultRecord {
    fn from(r: &CombinationResult) -> Self {
        let mut means = BTreeMap::new();
        for (metric, value) in r.means.iter() {
            means.insert(metric.name(), value);
        }
        for (metric, value) in r.theoretical.iter() {
            means.insert(metric.real_name(), value);
        }

        let intervals = r
            .interval_metrics()
            .map(|(metric, ci)| {
                let levels = ConfidenceLevel::ALL
                    .into_iter()
                    .map(|level| (level.label(), ci.get(level).as_pair()))
                    .collect();
                (metric.interval_key(), levels)
            })
            .collect();

        Self {
            mi:                     r.params.mi,
            lam:                    round3(r.params.lam),
            rho:                    round3(r.rho()),
            on:                     r.params.on_mean,
            off:                    r.params.off_mean,
            servers:                r.params.servers,
            variant:                r.variant.to_string(),
            repetitions:            r.repetitions,
            simulator_mean_results: means,
            confidence_intervals:   intervals,
        }
    }
}

// ── CSV row ──────────────────────────────────────────────────────────────────

const KEY_COLUMNS: [&str; 6] = ["mi", "lam", "rho", "on", "off", "servers"];

/// Header of `results.csv`: the key columns, then six columns per metric.
pub fn csv_header() -> Vec<String> {
    let mut header: Vec<String> = KEY_COLUMNS.iter().map(|c| c.to_string()).collect();
    for metric in Metric::ALL {
        header.push(metric.name().to_owned());
        header.push(metric.real_name().to_owned());
        for level in ConfidenceLevel::ALL {
            header.push(format!("{}_{}_low", metric.name(), level.short()));
            header.push(format!("{}_{}_high", metric.name(), level.short()));
        }
    }
    header
}

/// One `results.csv` row, aligned with [`csv_header`].  Absent values are
/// empty cells.
pub fn csv_row(r: &CombinationResult) -> Vec<String> {
    let cell = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();

    let mut row = vec![
        r.params.mi.to_string(),
        round3(r.params.lam).to_string(),
        round3(r.rho()).to_string(),
        r.params.on_mean.to_string(),
        r.params.off_mean.to_string(),
        r.params.servers.to_string(),
    ];
    for metric in Metric::ALL {
        row.push(cell(r.means.get(metric)));
        row.push(cell(r.theoretical.get(metric)));
        for level in ConfidenceLevel::ALL {
            let ci = r.interval(metric, level);
            row.push(cell(ci.map(|c| c.low)));
            row.push(cell(ci.map(|c| c.high)));
        }
    }
    row
}
