// Central Student-t distribution CDF, built on the incomplete beta function.
//
// The identity used here: for T ~ t(df),
//   P(|T| > t) = I_x(df/2, 1/2)  with  x = df / (df + t^2)
// which gives the one-sided CDF after halving and reflecting on the sign
// of t. See Abramowitz & Stegun 26.5.27.

use crate::special::regularized_incomplete_beta;

/// CDF of the central Student-t distribution: `P(T <= t)` with `df`
/// degrees of freedom.
///
/// Returns NaN when `df <= 0`: this is a low-level numeric primitive, so
/// a contract violation yields a quiet NaN rather than a panic; callers
/// must check. Within the engine it is unreachable: the paired t-test only
/// calls with `df >= 1` because it guards `n >= 2`.
pub fn student_t_cdf(t: f64, df: i64) -> f64 {
    if df <= 0 {
        return f64::NAN;
    }
    let dff = df as f64;
    let x = dff / (dff + t * t);
    let ib = regularized_incomplete_beta(dff / 2.0, 0.5, x);
    if t > 0.0 {
        1.0 - ib / 2.0
    } else {
        ib / 2.0
    }
}
