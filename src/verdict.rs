// Significance verdict assessment for a pre/post cohort
//
// This module wires pair selection and the paired t-test into the single
// verdict the reporting views render. It adds no statistics of its own;
// every number in the assessment is re-derivable from the raw paired
// sample.

use crate::config::SignificanceConfig;
use crate::pairing::{build_pairs, Observation, PairedSample};
use crate::ttest::{paired_t_test, TestSummary};
use anyhow::Result;
use serde::Serialize;

/// Final verdict for a cohort's pre/post uplift
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum UpliftVerdict {
    /// Mean delta is statistically significant (p < significance_level)
    Significant { mean_delta: f64, p_value: f64 },

    /// A defined p-value that does not clear the significance level
    NotSignificant { p_value: f64 },

    /// Too few pairs, or a degenerate sample with no defined t-statistic
    InsufficientData { reason: String },
}

/// Detailed assessment result for the reporting views
#[derive(Debug, Clone, Serialize)]
pub struct UpliftAssessment {
    /// Final verdict
    pub verdict: UpliftVerdict,

    /// Full t-test summary record
    pub summary: TestSummary,

    /// Per-subject pre/post/delta rows, ordered by subject id (callers may
    /// anonymize or relabel before display)
    pub pairs: PairedSample,

    /// Configuration used for assessment
    pub config: SignificanceConfig,
}

impl UpliftAssessment {
    /// Generate human-readable report
    pub fn to_report_string(&self) -> String {
        let mut report = String::new();

        match &self.verdict {
            UpliftVerdict::Significant { mean_delta, p_value } => {
                report.push_str("SIGNIFICANT UPLIFT\n\n");
                report.push_str(&format!(
                    "Mean accuracy change: {:+.1} pct points (n={}, p={:.4})\n",
                    mean_delta, self.summary.n, p_value
                ));
            }
            UpliftVerdict::NotSignificant { p_value } => {
                report.push_str("NO SIGNIFICANT UPLIFT\n\n");
                report.push_str(&format!(
                    "p={:.4} at significance level {} ({}% confidence)\n",
                    p_value,
                    self.config.significance_level,
                    (1.0 - self.config.significance_level) * 100.0
                ));
            }
            UpliftVerdict::InsufficientData { reason } => {
                report.push_str("INSUFFICIENT DATA\n\n");
                report.push_str(&format!("Reason: {}\n", reason));
            }
        }

        if !self.pairs.is_empty() {
            report.push_str(&format!("\nPaired subjects ({}):\n", self.pairs.len()));
            for pair in &self.pairs.pairs {
                report.push_str(&format!(
                    "  {}: {:.1}% -> {:.1}% ({:+.1})\n",
                    pair.subject_id, pair.pre_pct, pair.post_pct, pair.delta_pct
                ));
            }
        }

        report
    }
}

/// Assess the pre/post uplift of a cohort from its observation snapshot.
///
/// # Arguments
/// * `observations` - Raw assessment observations (cohort selection is the
///   caller's responsibility; the engine only applies eligibility rules)
/// * `config` - Significance assessment configuration
///
/// # Example
/// ```
/// use uplift::config::SignificanceConfig;
/// use uplift::pairing::{AssessmentKind, Observation};
/// use uplift::verdict::assess_uplift;
///
/// let mut observations = Vec::new();
/// for (i, (pre, post)) in [(4.0, 9.0), (5.0, 8.0), (3.0, 9.0), (6.0, 10.0)]
///     .iter()
///     .enumerate()
/// {
///     let id = i as i64;
///     observations.push(Observation {
///         subject_id: format!("s{}", i),
///         kind: AssessmentKind::Pre,
///         score: *pre,
///         total: 10.0,
///         timestamp: Some(100),
///         record_id: id * 2,
///     });
///     observations.push(Observation {
///         subject_id: format!("s{}", i),
///         kind: AssessmentKind::Post,
///         score: *post,
///         total: 10.0,
///         timestamp: Some(200),
///         record_id: id * 2 + 1,
///     });
/// }
///
/// let assessment =
///     assess_uplift(&observations, &SignificanceConfig::default()).unwrap();
/// assert_eq!(assessment.summary.n, 4);
/// ```
pub fn assess_uplift(
    observations: &[Observation],
    config: &SignificanceConfig,
) -> Result<UpliftAssessment> {
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let pairs = build_pairs(observations);
    let summary = paired_t_test(&pairs.deltas());

    let verdict = if summary.n < config.min_pairs {
        let reason = format!(
            "{} paired subjects, need at least {}",
            summary.n, config.min_pairs
        );
        tracing::warn!(n = summary.n, min_pairs = config.min_pairs, "insufficient pairs");
        UpliftVerdict::InsufficientData { reason }
    } else {
        match (summary.p_two, summary.mean_delta) {
            (Some(p), Some(mean_delta)) if p < config.significance_level => {
                UpliftVerdict::Significant {
                    mean_delta,
                    p_value: p,
                }
            }
            (Some(p), _) => UpliftVerdict::NotSignificant { p_value: p },
            (None, _) => {
                tracing::warn!(n = summary.n, "zero-variance sample, t undefined");
                UpliftVerdict::InsufficientData {
                    reason: "zero-variance delta sample, t-statistic undefined".to_string(),
                }
            }
        }
    };

    Ok(UpliftAssessment {
        verdict,
        summary,
        pairs,
        config: config.clone(),
    })
}
