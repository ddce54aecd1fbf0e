// Pair selection: reduce raw assessment observations to one pre/post pair
// per subject and emit the accuracy-percentage delta sample.
//
// The caller owns the observation snapshot (cohort selection, date ranges,
// channel filters all happen upstream); this module only applies the
// eligibility rule (total > 0, timestamp present) and the
// latest-per-kind-per-subject reduction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which phase of the training an observation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentKind {
    Pre,
    Post,
}

/// A single recorded assessment attempt, as supplied by the assessment
/// repository. Immutable once recorded; the engine borrows it read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// Opaque learner identity the attempt belongs to.
    pub subject_id: String,
    pub kind: AssessmentKind,
    /// Number of phishing items answered correctly.
    pub score: f64,
    /// Number of items in the assessment; must be > 0 to be eligible.
    pub total: f64,
    /// Recording instant (dashboard convention: unix milliseconds). The
    /// engine only compares these, so the unit is irrelevant. `None` makes
    /// the observation ineligible.
    pub timestamp: Option<i64>,
    /// Monotonically assigned row id, used to break timestamp ties.
    pub record_id: i64,
}

impl Observation {
    /// Accuracy as a percentage: `100 * score / total`.
    pub fn accuracy_pct(&self) -> f64 {
        100.0 * self.score / self.total
    }

    fn is_eligible(&self) -> bool {
        self.total > 0.0 && self.timestamp.is_some()
    }

    /// Recency key: later timestamp wins, highest record id breaks ties.
    fn recency(&self) -> (Option<i64>, i64) {
        (self.timestamp, self.record_id)
    }
}

/// One matched subject: latest eligible pre and post accuracy, and their
/// difference. Subject identity is carried through untouched; relabeling
/// or anonymization is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectPair {
    pub subject_id: String,
    pub pre_pct: f64,
    pub post_pct: f64,
    pub delta_pct: f64,
}

/// The paired delta sample: one row per subject that has both an eligible
/// pre and an eligible post attempt, ordered by subject id so output is
/// deterministic for a given snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PairedSample {
    pub pairs: Vec<SubjectPair>,
}

impl PairedSample {
    /// Per-subject deltas, the input to the paired t-test.
    pub fn deltas(&self) -> Vec<f64> {
        self.pairs.iter().map(|p| p.delta_pct).collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Build the paired sample from an observation snapshot.
///
/// 1. Discard observations with `total <= 0` or a missing timestamp.
/// 2. Per `(subject, kind)`, keep only the latest observation (max
///    timestamp, ties broken by highest record id).
/// 3. Keep only subjects present in both the pre and the post group.
/// 4. Emit `delta = post accuracy - pre accuracy` for each kept subject.
///
/// Pure function: no side effects, deterministic for a given input
/// collection regardless of its ordering.
pub fn build_pairs(observations: &[Observation]) -> PairedSample {
    // BTreeMap keyed by subject keeps the output ordering deterministic.
    let mut latest: BTreeMap<&str, (Option<&Observation>, Option<&Observation>)> = BTreeMap::new();

    for obs in observations {
        if !obs.is_eligible() {
            tracing::debug!(
                subject = %obs.subject_id,
                record_id = obs.record_id,
                "discarding ineligible observation"
            );
            continue;
        }

        let entry = latest.entry(obs.subject_id.as_str()).or_default();
        let slot = match obs.kind {
            AssessmentKind::Pre => &mut entry.0,
            AssessmentKind::Post => &mut entry.1,
        };
        let newer = match slot {
            Some(kept) => obs.recency() > kept.recency(),
            None => true,
        };
        if newer {
            *slot = Some(obs);
        }
    }

    let mut pairs = Vec::new();
    for (subject, (pre, post)) in latest {
        let (Some(pre), Some(post)) = (pre, post) else {
            tracing::debug!(subject, "subject lacks a matched pre/post pair, dropped");
            continue;
        };
        let pre_pct = pre.accuracy_pct();
        let post_pct = post.accuracy_pct();
        pairs.push(SubjectPair {
            subject_id: subject.to_string(),
            pre_pct,
            post_pct,
            delta_pct: post_pct - pre_pct,
        });
    }

    PairedSample { pairs }
}
