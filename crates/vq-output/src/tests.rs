//! Tests for vq-output.

use vq_core::{Params, SimTime, Variant};
use vq_engine::{Metric, MetricValues, RunSummary};
use vq_sweep::CombinationResult;
use vq_sweep::orchestrator::reduce;

fn summary(system_time: f64) -> RunSummary {
    RunSummary {
        measured: MetricValues::new()
            .with(Metric::MeanSystemTime, system_time)
            .with(Metric::ServerOnProb, 0.5),
        theoretical: MetricValues::new()
            .with(Metric::MeanServiceTime, 1.0)
            .with(Metric::MeanSystemTime, 2.0),
        served:        100,
        arrivals:      101,
        interruptions: 3,
        events:        400,
        end_time:      SimTime(50.0),
    }
}

fn result(lam: f64) -> CombinationResult {
    let params = Params { mi: 3.0, lam, on_mean: 40.0, off_mean: 35.0, servers: 1 };
    reduce(0, params, Variant::A, &[summary(1.5), summary(2.5), summary(2.0)]).unwrap()
}

#[cfg(test)]
mod row_tests {
    use super::*;
    use crate::{ResultRecord, csv_header, csv_row, round3};

    #[test]
    fn rounding() {
        assert_eq!(round3(1.0 / 3.0), 0.333);
        assert_eq!(round3(0.6666), 0.667);
        assert_eq!(round3(2.0), 2.0);
    }

    #[test]
    fn record_layout() {
        let record = ResultRecord::from(&result(1.0));
        assert_eq!(record.lam, 1.0);
        assert_eq!(record.rho, 0.333);
        assert_eq!(record.variant, "A");
        assert_eq!(record.simulator_mean_results["mean_system_time"], 2.0);
        assert_eq!(record.simulator_mean_results["real_mean_system_time"], 2.0);
        assert_eq!(record.simulator_mean_results["real_mean_service_time"], 1.0);
        assert!(!record.simulator_mean_results.contains_key("mean_service_time"));

        let system = &record.confidence_intervals["system_time"];
        let (lo95, hi95) = system["0.95"];
        let (lo99, hi99) = system["0.99"];
        assert!(lo99 < lo95 && lo95 < 2.0 && 2.0 < hi95 && hi95 < hi99);
        assert!(record.confidence_intervals.contains_key("server_on_prob"));
        assert!(!record.confidence_intervals.contains_key("service_time"));
    }

    #[test]
    fn header_and_row_align() {
        let header = csv_header();
        let row = csv_row(&result(1.0));
        assert_eq!(header.len(), 6 + Metric::COUNT * 6);
        assert_eq!(header.len(), row.len());
        assert_eq!(&header[..7], ["mi", "lam", "rho", "on", "off", "servers", "mean_service_time"]);
        assert!(header.contains(&"mean_system_time_ci95_low".to_owned()));

        let col = |name: &str| header.iter().position(|h| h == name).unwrap();
        assert_eq!(row[col("rho")], "0.333");
        assert_eq!(row[col("mean_service_time")], "");
        assert_eq!(row[col("real_mean_service_time")], "1");
        assert_eq!(row[col("mean_system_time")], "2");
    }
}

#[cfg(test)]
mod writer_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{CsvWriter, JsonWriter, OutputWriter, csv_header};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn files_created() {
        let dir = tmp();
        let _json = JsonWriter::new(dir.path()).unwrap();
        let _csv = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("results.json").exists());
        assert!(dir.path().join("results.csv").exists());
    }

    #[test]
    fn json_array_in_order() {
        let dir = tmp();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.write_results(&[result(0.5), result(1.0)]).unwrap();
        w.write_results(&[result(1.5)]).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let text = std::fs::read_to_string(w.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 3);
        let lams: Vec<_> = records.iter().map(|r| r["lam"].as_f64().unwrap()).collect();
        assert_eq!(lams, vec![0.5, 1.0, 1.5]);
        let ci = &records[0]["confidence_intervals"]["system_time"]["0.95"];
        assert_eq!(ci.as_array().unwrap().len(), 2);
        assert!(records[0]["simulator_mean_results"]["mean_system_time"].is_number());
    }

    #[test]
    fn csv_rows_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_results(&[result(0.5), result(1.0)]).unwrap();
        w.finish().unwrap();

        let mut rdr = ::csv::Reader::from_path(w.path()).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, csv_header());
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "0.5");
        assert_eq!(&rows[1][1], "1");
    }

    #[test]
    fn empty_sweep_writes_empty_array() {
        let dir = tmp();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        let text = std::fs::read_to_string(dir.path().join("results.json")).unwrap();
        assert_eq!(text.trim(), "[]");
    }
}
