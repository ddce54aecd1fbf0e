//! Uplift - paired-sample significance engine for pre/post training assessments
//!
//! This library takes a snapshot of pre/post phishing-detection assessment
//! observations, forms one matched pair per subject from the latest eligible
//! attempts, and reports whether the cohort's accuracy change is
//! statistically significant via a two-tailed paired t-test. The Student-t
//! CDF is computed from scratch (Lanczos log-gamma plus a continued-fraction
//! regularized incomplete beta), with no statistics library dependency.
//!
//! Every operation is a pure, synchronous function of its explicit input:
//! no shared state, no I/O, safe to call from concurrent request handlers.

pub mod config;
pub mod pairing;
pub mod special;
pub mod student_t;
pub mod ttest;
pub mod verdict;

pub use config::SignificanceConfig;
pub use pairing::{build_pairs, AssessmentKind, Observation, PairedSample, SubjectPair};
pub use ttest::{paired_t_test, TestSummary};
pub use verdict::{assess_uplift, UpliftAssessment, UpliftVerdict};
