// Paired t-test over the per-subject delta sample.
//
// The summary is recomputed from the current paired sample on every call;
// nothing is persisted, and callers can re-derive every field from the raw
// deltas for verification.

use crate::student_t::student_t_cdf;
use serde::Serialize;

/// Summary record of the paired t-test.
///
/// `n` is the number of subjects in the paired sample and `df = n - 1`
/// (0 when `n` is 0). The statistic fields are `None` in the degenerate
/// cases (`n < 2`, or zero variance), which reporting UIs must render as
/// "insufficient data", never as a fabricated number. `None` serializes
/// to JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestSummary {
    pub n: usize,
    pub df: usize,
    pub mean_delta: Option<f64>,
    /// Sample (Bessel-corrected) standard deviation of the deltas.
    pub sd: Option<f64>,
    /// Standard error of the mean delta; 0 for a zero-variance sample.
    pub se: Option<f64>,
    /// t-statistic `mean / se`; `None` when `se` is 0 (the degenerate
    /// "infinite t" case is reported as absent, never as infinity).
    pub t: Option<f64>,
    /// Two-tailed p-value, clamped to `[0, 1]`; `None` whenever `t` is.
    pub p_two: Option<f64>,
}

impl TestSummary {
    fn degenerate(n: usize, mean_delta: Option<f64>) -> Self {
        Self {
            n,
            df: n.saturating_sub(1),
            mean_delta,
            sd: None,
            se: None,
            t: None,
            p_two: None,
        }
    }
}

/// Run the two-tailed paired t-test on a delta sample. Order of the input
/// is irrelevant; the function is pure.
pub fn paired_t_test(deltas: &[f64]) -> TestSummary {
    let n = deltas.len();
    if n == 0 {
        return TestSummary::degenerate(0, None);
    }

    let mean = deltas.iter().sum::<f64>() / n as f64;
    if n == 1 {
        // Sample variance is undefined for n=1: a defined, reportable
        // state, not an error.
        return TestSummary::degenerate(1, Some(mean));
    }

    let df = n - 1;
    let ss: f64 = deltas.iter().map(|d| (d - mean).powi(2)).sum();
    let sd = (ss / df as f64).sqrt();
    let se = if sd > 0.0 { sd / (n as f64).sqrt() } else { 0.0 };

    let t = if se > 0.0 { Some(mean / se) } else { None };
    let p_two = t.filter(|t| t.is_finite()).map(|t| {
        let p = 2.0 * (1.0 - student_t_cdf(t.abs(), df as i64));
        p.clamp(0.0, 1.0)
    });

    TestSummary {
        n,
        df,
        mean_delta: Some(mean),
        sd: Some(sd),
        se: Some(se),
        t,
        p_two,
    }
}
