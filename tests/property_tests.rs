//! Property-based tests for the numeric primitives and the pairing rules
//!
//! These cover the mathematical invariants that hold for whole input
//! ranges rather than single hand-computed cases.

use proptest::prelude::*;
use uplift::pairing::{build_pairs, AssessmentKind, Observation};
use uplift::special::regularized_incomplete_beta;
use uplift::student_t::student_t_cdf;
use uplift::ttest::paired_t_test;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_incomplete_beta_stays_in_unit_interval(
        a in 0.1f64..50.0,
        b in 0.1f64..50.0,
        x in 0.0f64..=1.0,
    ) {
        let v = regularized_incomplete_beta(a, b, x);
        prop_assert!((0.0..=1.0).contains(&v), "I_{}({},{}) = {}", x, a, b, v);
    }

    #[test]
    fn prop_incomplete_beta_symmetry(
        a in 0.1f64..20.0,
        b in 0.1f64..20.0,
        x in 0.001f64..0.999,
    ) {
        let lhs = regularized_incomplete_beta(a, b, x);
        let rhs = 1.0 - regularized_incomplete_beta(b, a, 1.0 - x);
        prop_assert!((lhs - rhs).abs() < 1e-6, "{} vs {}", lhs, rhs);
    }

    #[test]
    fn prop_t_cdf_reflects_around_zero(
        t in -50.0f64..50.0,
        df in 1i64..200,
    ) {
        let sum = student_t_cdf(t, df) + student_t_cdf(-t, df);
        prop_assert!((sum - 1.0).abs() < 1e-6, "df={} t={} sum={}", df, t, sum);
    }

    #[test]
    fn prop_t_cdf_bounded_and_monotone(
        t in -20.0f64..20.0,
        df in 1i64..100,
    ) {
        let v = student_t_cdf(t, df);
        prop_assert!((0.0..=1.0).contains(&v));
        // A step to the right never decreases the CDF
        let v_right = student_t_cdf(t + 0.5, df);
        prop_assert!(v_right >= v - 1e-9);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_p_value_valid_for_any_sample(
        deltas in prop::collection::vec(-100.0f64..100.0, 0..40),
    ) {
        let summary = paired_t_test(&deltas);
        prop_assert_eq!(summary.n, deltas.len());
        prop_assert_eq!(summary.df, deltas.len().saturating_sub(1));

        if let Some(p) = summary.p_two {
            prop_assert!((0.0..=1.0).contains(&p), "p out of range: {}", p);
        }
        // t and p are defined together or not at all
        prop_assert_eq!(summary.t.is_some(), summary.p_two.is_some());
    }

    #[test]
    fn prop_shifting_deltas_shifts_mean(
        deltas in prop::collection::vec(-50.0f64..50.0, 2..20),
        shift in -10.0f64..10.0,
    ) {
        let base = paired_t_test(&deltas);
        let shifted: Vec<f64> = deltas.iter().map(|d| d + shift).collect();
        let moved = paired_t_test(&shifted);

        let expected = base.mean_delta.unwrap() + shift;
        prop_assert!((moved.mean_delta.unwrap() - expected).abs() < 1e-9);
        // Spread is translation-invariant
        prop_assert!((moved.sd.unwrap() - base.sd.unwrap()).abs() < 1e-9);
    }

    #[test]
    fn prop_pairing_never_exceeds_subject_count(
        scores in prop::collection::vec((0u8..=10, 0u8..=10), 1..15),
    ) {
        let mut observations = Vec::new();
        for (i, (pre, post)) in scores.iter().enumerate() {
            let id = i as i64;
            observations.push(Observation {
                subject_id: format!("s{}", i),
                kind: AssessmentKind::Pre,
                score: f64::from(*pre),
                total: 10.0,
                timestamp: Some(100 + id),
                record_id: id * 2,
            });
            observations.push(Observation {
                subject_id: format!("s{}", i),
                kind: AssessmentKind::Post,
                score: f64::from(*post),
                total: 10.0,
                timestamp: Some(500 + id),
                record_id: id * 2 + 1,
            });
        }

        let sample = build_pairs(&observations);
        prop_assert_eq!(sample.len(), scores.len());
        for pair in &sample.pairs {
            prop_assert!((-100.0..=100.0).contains(&pair.delta_pct));
        }
    }

    #[test]
    fn prop_pairing_is_order_independent(
        seed_order in prop::collection::vec(0usize..6, 6..12),
    ) {
        // A fixed pool of observations visited in an arbitrary order must
        // always produce the same paired sample.
        let pool: Vec<Observation> = (0..6)
            .flat_map(|i| {
                let id = i as i64;
                [
                    Observation {
                        subject_id: format!("s{}", i % 3),
                        kind: AssessmentKind::Pre,
                        score: f64::from(i as u8),
                        total: 10.0,
                        timestamp: Some(100 + id),
                        record_id: id * 2,
                    },
                    Observation {
                        subject_id: format!("s{}", i % 3),
                        kind: AssessmentKind::Post,
                        score: f64::from(10 - i as u8),
                        total: 10.0,
                        timestamp: Some(500 + id),
                        record_id: id * 2 + 1,
                    },
                ]
            })
            .collect();

        let shuffled: Vec<Observation> =
            seed_order.iter().map(|&i| pool[i % pool.len()].clone()).collect();

        // Feeding a subset twice must equal feeding it once: the reduction
        // keeps only the latest per (subject, kind)
        let mut doubled = shuffled.clone();
        doubled.extend(shuffled.iter().cloned());

        prop_assert_eq!(build_pairs(&shuffled), build_pairs(&doubled));
    }
}
