//! Unit tests for vq-core primitives.

#[cfg(test)]
mod ids {
    use crate::CustomerId;

    #[test]
    fn server_is_reserved_zero() {
        assert_eq!(CustomerId::SERVER.0, 0);
        assert!(CustomerId::SERVER.is_server());
        assert!(!CustomerId::FIRST.is_server());
    }

    #[test]
    fn next_and_index() {
        assert_eq!(CustomerId::FIRST.next(), CustomerId(2));
        assert_eq!(CustomerId(7).index(), 7);
    }

    #[test]
    fn display() {
        assert_eq!(CustomerId(3).to_string(), "CustomerId(3)");
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{RunLimits, SimTime, TimeBudget};

    #[test]
    fn arithmetic() {
        let t = SimTime(1.5);
        assert_eq!(t + 2.0, SimTime(3.5));
        assert!((SimTime(4.0) - SimTime(1.5) - 2.5).abs() < 1e-12);
        assert!((SimTime(1.0) - SimTime(3.0) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn total_order() {
        let mut v = vec![SimTime(3.0), SimTime(-1.0), SimTime(0.0), SimTime(f64::INFINITY)];
        v.sort();
        assert_eq!(v, vec![SimTime(-1.0), SimTime(0.0), SimTime(3.0), SimTime(f64::INFINITY)]);
    }

    #[test]
    fn wall_clock_budget() {
        let limits = RunLimits { time_limit: 2.5, ..RunLimits::default() };
        assert_eq!(limits.wall_clock(), Duration::from_millis(2500));
        assert_eq!(limits.horizon(), None);

        let negative = RunLimits { time_limit: -1.0, ..RunLimits::default() };
        assert_eq!(negative.wall_clock(), Duration::ZERO);
    }

    #[test]
    fn simulated_budget_has_horizon() {
        let limits = RunLimits {
            time_limit:   100.0,
            budget:       TimeBudget::Simulated,
            events_limit: 10,
        };
        assert_eq!(limits.horizon(), Some(SimTime(100.0)));
    }
}

#[cfg(test)]
mod params {
    use crate::{CoreError, Params, Recovery, Variant};

    fn params() -> Params {
        Params { mi: 1.0, lam: 0.5, on_mean: 40.0, off_mean: 35.0, servers: 1 }
    }

    #[test]
    fn derived_values() {
        let p = params();
        assert!((p.rho() - 0.5).abs() < 1e-12);
        assert!((p.p_on() - 40.0 / 75.0).abs() < 1e-12);
        assert!((p.p_on() + p.p_off() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn variant_parsing() {
        assert_eq!(Variant::from("A".to_string()), Variant::A);
        assert_eq!(Variant::from("B".to_string()), Variant::B);
        assert_eq!(Variant::from("C".to_string()), Variant::NoVacation);
        assert_eq!(Variant::from(String::new()), Variant::NoVacation);
    }

    #[test]
    fn variant_recovery() {
        assert_eq!(Variant::A.recovery(), Some(Recovery::Resume));
        assert_eq!(Variant::B.recovery(), Some(Recovery::Restart));
        assert_eq!(Variant::NoVacation.recovery(), None);
    }

    #[test]
    fn validate_rejects_non_positive_rates() {
        let bad = Params { mi: 0.0, ..params() };
        assert!(matches!(bad.validate(true), Err(CoreError::Distribution { name: "mi", .. })));

        let nan = Params { lam: f64::NAN, ..params() };
        assert!(nan.validate(false).is_err());
    }

    #[test]
    fn validate_ignores_on_off_without_vacations() {
        let p = Params { on_mean: 0.0, off_mean: -1.0, ..params() };
        assert!(p.validate(false).is_ok());
        assert!(p.validate(true).is_err());
    }

    #[test]
    fn validate_rejects_zero_servers() {
        let p = Params { servers: 0, ..params() };
        assert!(matches!(p.validate(false), Err(CoreError::Config(_))));
    }
}

#[cfg(test)]
mod rng {
    use crate::{ExpVariates, Params, SeedStream, VariateSource};

    fn params() -> Params {
        Params { mi: 2.0, lam: 1.0, on_mean: 40.0, off_mean: 35.0, servers: 1 }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = ExpVariates::new(7, &params(), true).unwrap();
        let mut b = ExpVariates::new(7, &params(), true).unwrap();
        for _ in 0..100 {
            assert_eq!(a.service_time(), b.service_time());
            assert_eq!(a.on_duration(), b.on_duration());
        }
    }

    #[test]
    fn kinds_draw_from_independent_streams() {
        // Interleaving other draws must not shift the on/off sequence.
        let mut quiet = ExpVariates::new(11, &params(), true).unwrap();
        let mut busy = ExpVariates::new(11, &params(), true).unwrap();
        for i in 0..50 {
            for _ in 0..i % 4 {
                busy.service_time();
                busy.interarrival_time();
            }
            assert_eq!(quiet.on_duration(), busy.on_duration());
            assert_eq!(quiet.off_duration(), busy.off_duration());
        }
        assert_eq!(quiet.service_time(), ExpVariates::new(11, &params(), true).unwrap().service_time());
    }

    #[test]
    fn sample_means_match_parameters() {
        let mut v = ExpVariates::new(1, &params(), true).unwrap();
        let n = 50_000;
        let service: f64 = (0..n).map(|_| v.service_time()).sum::<f64>() / n as f64;
        let arrival: f64 = (0..n).map(|_| v.interarrival_time()).sum::<f64>() / n as f64;
        let on: f64 = (0..n).map(|_| v.on_duration()).sum::<f64>() / n as f64;
        assert!((service - 0.5).abs() < 0.02, "service mean {service}");
        assert!((arrival - 1.0).abs() < 0.04, "arrival mean {arrival}");
        assert!((on - 40.0).abs() < 1.5, "on mean {on}");
    }

    #[test]
    fn no_vacation_never_goes_off() {
        let mut v = ExpVariates::new(1, &params(), false).unwrap();
        assert!(v.on_duration().is_infinite());
    }

    #[test]
    fn invalid_rate_is_rejected() {
        let p = Params { lam: -1.0, ..params() };
        assert!(ExpVariates::new(1, &p, false).is_err());
    }

    #[test]
    fn seed_streams_are_deterministic_and_distinct() {
        let mut a = SeedStream::new(42, 0);
        let mut b = SeedStream::new(42, 0);
        let mut c = SeedStream::new(42, 1);
        let sa: Vec<u64> = (0..10).map(|_| a.next_seed().unwrap()).collect();
        let sb: Vec<u64> = (0..10).map(|_| b.next_seed().unwrap()).collect();
        let sc: Vec<u64> = (0..10).map(|_| c.next_seed().unwrap()).collect();
        assert_eq!(sa, sb);
        assert_ne!(sa, sc);
        assert_eq!(a.issued(), 10);
    }
}

#[cfg(test)]
mod config {
    use crate::{SweepConfig, TimeBudget, Variant};

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(SweepConfig::from_json_str("{}"), SweepConfig::default());
    }

    #[test]
    fn malformed_json_gives_defaults() {
        assert_eq!(SweepConfig::from_json_str("{ not json"), SweepConfig::default());
        assert_eq!(SweepConfig::from_json_str("\"just text\""), SweepConfig::default());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = SweepConfig::load(std::path::Path::new("/definitely/not/here.json"));
        assert_eq!(cfg, SweepConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let cfg = SweepConfig::from_json_str(
            r#"{"lam_values": [0.5, 0.7], "variant": "B", "seed": 42, "time_budget": "simulated"}"#,
        );
        assert_eq!(cfg.lam_values, vec![0.5, 0.7]);
        assert_eq!(cfg.variant, Variant::B);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.time_budget, TimeBudget::Simulated);
        assert_eq!(cfg.mi_values, vec![0.6]);
        assert_eq!(cfg.events_limit, 10_000);
    }

    #[test]
    fn unknown_variant_selects_no_vacation() {
        let cfg = SweepConfig::from_json_str(r#"{"variant": "none"}"#);
        assert_eq!(cfg.variant, Variant::NoVacation);
    }

    #[test]
    fn combinations_are_cartesian_product_in_order() {
        let cfg = SweepConfig {
            mi_values: vec![1.0, 2.0],
            lam_values: vec![0.1, 0.2, 0.3],
            server_counts: vec![1, 2],
            ..SweepConfig::default()
        };
        let combos = cfg.combinations();
        assert_eq!(combos.len(), 12);
        assert_eq!((combos[0].mi, combos[0].lam, combos[0].servers), (1.0, 0.1, 1));
        assert_eq!((combos[1].mi, combos[1].lam, combos[1].servers), (1.0, 0.1, 2));
        assert_eq!((combos[2].mi, combos[2].lam, combos[2].servers), (1.0, 0.2, 1));
        assert_eq!((combos[11].mi, combos[11].lam, combos[11].servers), (2.0, 0.3, 2));
    }

    #[test]
    fn validate_default_is_ok() {
        assert!(SweepConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_lists_and_zero_limits() {
        let empty = SweepConfig { lam_values: vec![], ..SweepConfig::default() };
        assert!(empty.validate().is_err());

        let zero = SweepConfig { events_limit: 0, ..SweepConfig::default() };
        assert!(zero.validate().is_err());

        let bad_rate = SweepConfig { mi_values: vec![1.0, -2.0], ..SweepConfig::default() };
        assert!(bad_rate.validate().is_err());
    }

    #[test]
    fn run_limits_mirror_config() {
        let cfg = SweepConfig { time_limit: 5.0, events_limit: 2000, ..SweepConfig::default() };
        let limits = cfg.run_limits();
        assert_eq!(limits.time_limit, 5.0);
        assert_eq!(limits.events_limit, 2000);
        assert_eq!(limits.budget, TimeBudget::WallClock);
    }
}
