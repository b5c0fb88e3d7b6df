//! Unit tests for vq-stats.

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[cfg(test)]
mod sample {
    use super::close;
    use crate::{SampleSummary, StatsError, mean};

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 6.0]).unwrap(), 3.0);
        assert_eq!(mean(&[4.0]).unwrap(), 4.0);
    }

    #[test]
    fn mean_of_nothing_is_an_error() {
        assert!(matches!(
            mean(&[]),
            Err(StatsError::InsufficientSamples { needed: 1, got: 0, .. })
        ));
    }

    #[test]
    fn summary_moments() {
        let s = SampleSummary::from_samples(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(s.n, 5);
        assert!(close(s.mean, 3.0, 1e-12));
        assert!(close(s.variance, 2.5, 1e-12));
        assert!(close(s.std_err, 0.5f64.sqrt(), 1e-12));
    }

    #[test]
    fn summary_needs_two_samples() {
        assert!(matches!(
            SampleSummary::from_samples(&[1.0]),
            Err(StatsError::InsufficientSamples { needed: 2, got: 1, .. })
        ));
        assert!(SampleSummary::from_samples(&[]).is_err());
    }

    #[test]
    fn non_finite_values_rejected() {
        assert_eq!(
            SampleSummary::from_samples(&[1.0, f64::INFINITY]),
            Err(StatsError::NonFinite(f64::INFINITY))
        );
        assert!(mean(&[f64::NAN]).is_err());
    }
}

#[cfg(test)]
mod quantile {
    use super::close;
    use crate::{inv_norm_cdf, student_t_cdf, student_t_quantile, z_for_confidence};

    #[test]
    fn normal_quantiles() {
        assert!(close(inv_norm_cdf(0.5).unwrap(), 0.0, 1e-9));
        assert!(close(inv_norm_cdf(0.975).unwrap(), 1.959_964, 1e-6));
        assert!(close(inv_norm_cdf(0.995).unwrap(), 2.575_829, 1e-6));
        assert!(close(inv_norm_cdf(0.01).unwrap(), -2.326_348, 1e-6));
        assert!(close(inv_norm_cdf(0.999).unwrap(), 3.090_232, 1e-6));
    }

    #[test]
    fn normal_quantile_rejects_bounds() {
        assert!(inv_norm_cdf(0.0).is_err());
        assert!(inv_norm_cdf(1.0).is_err());
        assert!(inv_norm_cdf(f64::NAN).is_err());
    }

    #[test]
    fn z_values() {
        assert!(close(z_for_confidence(0.95).unwrap(), 1.959_964, 1e-6));
        assert!(close(z_for_confidence(0.99).unwrap(), 2.575_829, 1e-6));
        assert!(z_for_confidence(1.0).is_err());
    }

    #[test]
    fn t_cdf_basics() {
        assert!(close(student_t_cdf(0.0, 5).unwrap(), 0.5, 1e-12));
        // df = 1 is Cauchy: cdf(1) = 0.75.
        assert!(close(student_t_cdf(1.0, 1).unwrap(), 0.75, 1e-10));
        assert!(close(student_t_cdf(-1.0, 1).unwrap(), 0.25, 1e-10));
        assert!(close(student_t_cdf(2.262_157, 9).unwrap(), 0.975, 1e-6));
        assert!(student_t_cdf(1.0, 0).is_err());
    }

    #[test]
    fn t_quantiles_match_tables() {
        let cases = [
            (0.975, 1, 12.706_205),
            (0.975, 2, 4.302_653),
            (0.975, 4, 2.776_445),
            (0.975, 9, 2.262_157),
            (0.995, 9, 3.249_836),
            (0.975, 29, 2.045_230),
            (0.995, 1, 63.656_741),
        ];
        for (p, df, expected) in cases {
            let got = student_t_quantile(p, df).unwrap();
            assert!(close(got, expected, 1e-5 * expected.max(1.0)), "t({p}, {df}) = {got}, want {expected}");
        }
    }

    #[test]
    fn t_quantile_closed_forms() {
        // df = 1: tan(π(p − ½)); df = 2: (2p − 1)/√(2p(1 − p)).
        for p in [0.6, 0.8, 0.9, 0.99] {
            let cauchy = (std::f64::consts::PI * (p - 0.5)).tan();
            assert!(close(student_t_quantile(p, 1).unwrap(), cauchy, 1e-8 * cauchy.max(1.0)));
            let two = (2.0 * p - 1.0) / (2.0 * p * (1.0 - p)).sqrt();
            assert!(close(student_t_quantile(p, 2).unwrap(), two, 1e-8 * two.max(1.0)));
        }
    }

    #[test]
    fn t_quantile_is_symmetric_and_approaches_normal() {
        let q = student_t_quantile(0.975, 7).unwrap();
        assert!(close(student_t_quantile(0.025, 7).unwrap(), -q, 1e-10));
        assert_eq!(student_t_quantile(0.5, 7).unwrap(), 0.0);
        let big = student_t_quantile(0.975, 1_000).unwrap();
        assert!(close(big, 1.962_339, 1e-5));
    }
}

#[cfg(test)]
mod interval {
    use super::close;
    use crate::{
        ConfidenceLevel, IntervalMethod, NORMAL_APPROX_MIN_SAMPLES, StatsError, confidence_interval,
    };

    #[test]
    fn method_switches_at_thirty() {
        assert_eq!(IntervalMethod::for_sample_size(2), IntervalMethod::StudentT { df: 1 });
        assert_eq!(IntervalMethod::for_sample_size(29), IntervalMethod::StudentT { df: 28 });
        assert_eq!(IntervalMethod::for_sample_size(NORMAL_APPROX_MIN_SAMPLES), IntervalMethod::Normal);
        assert_eq!(IntervalMethod::for_sample_size(500), IntervalMethod::Normal);
    }

    #[test]
    fn small_sample_uses_student_t() {
        let ci = confidence_interval(&[1.0, 2.0, 3.0, 4.0, 5.0], ConfidenceLevel::P95).unwrap();
        assert_eq!(ci.method, IntervalMethod::StudentT { df: 4 });
        let half = 2.776_445 * 0.5f64.sqrt();
        assert!(close(ci.low, 3.0 - half, 1e-5));
        assert!(close(ci.high, 3.0 + half, 1e-5));
        assert!(ci.contains(ci.mean));
    }

    #[test]
    fn large_sample_uses_normal() {
        let samples: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let ci = confidence_interval(&samples, ConfidenceLevel::P99).unwrap();
        assert_eq!(ci.method, IntervalMethod::Normal);
        let var: f64 = samples.iter().map(|x| (x - 14.5) * (x - 14.5)).sum::<f64>() / 29.0;
        let half = 2.575_829 * (var / 30.0).sqrt();
        assert!(close(ci.width(), 2.0 * half, 1e-5));
        assert!(close(ci.mean, 14.5, 1e-12));
    }

    #[test]
    fn wider_at_higher_confidence() {
        let samples = [2.0, 4.0, 4.0, 5.0, 7.0, 9.0];
        let ci95 = confidence_interval(&samples, ConfidenceLevel::P95).unwrap();
        let ci99 = confidence_interval(&samples, ConfidenceLevel::P99).unwrap();
        assert!(ci95.width() > 0.0);
        assert!(ci99.width() > ci95.width());
        assert!(ci99.low < ci95.low && ci95.high < ci99.high);
    }

    #[test]
    fn zero_variance_gives_degenerate_interval() {
        let ci = confidence_interval(&[3.0, 3.0, 3.0], ConfidenceLevel::P95).unwrap();
        assert_eq!(ci.as_pair(), (3.0, 3.0));
    }

    #[test]
    fn single_sample_is_an_error() {
        assert!(matches!(
            confidence_interval(&[1.0], ConfidenceLevel::P95),
            Err(StatsError::InsufficientSamples { .. })
        ));
    }

    #[test]
    fn level_labels() {
        assert_eq!(ConfidenceLevel::P95.label(), "0.95");
        assert_eq!(ConfidenceLevel::P99.short(), "ci99");
        assert_eq!(ConfidenceLevel::ALL.len(), 2);
    }
}
