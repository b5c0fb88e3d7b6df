//! Whole-sweep scenarios through the public API.

use vq_core::{SweepConfig, TimeBudget, Variant};
use vq_engine::{Metric, NoopObserver};
use vq_stats::{ConfidenceLevel, IntervalMethod};
use vq_sweep::SweepDriver;

#[test]
fn single_combination_sweep() {
    let config = SweepConfig::from_json_str(
        r#"{
            "lam_values": [0.5],
            "mi_values": [1.0],
            "on_values": [40],
            "off_values": [35],
            "server_counts": [1],
            "simulation_repetitions": 30,
            "time_limit": 5,
            "events_limit": 2000,
            "variant": "A",
            "seed": 42
        }"#,
    );
    let results = SweepDriver::new(config).unwrap().run().unwrap();

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert!((result.rho() - 0.5).abs() < 1e-12);
    assert!(result.means.get(Metric::MeanSystemTime).unwrap() >= 0.0);

    let intervals = result.intervals(Metric::MeanSystemTime).unwrap();
    assert_eq!(intervals.get(ConfidenceLevel::P95).method, IntervalMethod::Normal);
    assert!(intervals.p95.low <= intervals.p95.high);
    assert!(intervals.p99.low <= intervals.p99.high);
}

#[test]
fn mm1_mean_system_time() {
    let config = SweepConfig {
        lam_values:             vec![1.0],
        mi_values:              vec![2.0],
        server_counts:          vec![1],
        simulation_repetitions: 50,
        events_limit:           5000,
        time_limit:             1e9,
        time_budget:            TimeBudget::Simulated,
        variant:                Variant::NoVacation,
        seed:                   2024,
        multithreaded:          true,
        ..SweepConfig::default()
    };
    let results = SweepDriver::new(config).unwrap().run_with(|_, _| NoopObserver).unwrap();

    let system = results[0].means.get(Metric::MeanSystemTime).unwrap();
    assert!((system - 1.0).abs() < 0.1, "mean system time {system}");
    let real = results[0].theoretical.get(Metric::MeanSystemTime).unwrap();
    assert!((real - 1.0).abs() < 1e-12);
}
