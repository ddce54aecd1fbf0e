// Configuration for significance assessment
//
// Thresholds are configuration, not magic numbers baked into call sites:
// the dashboard persists one of these per installation.

use serde::{Deserialize, Serialize};

/// Configuration for assessing whether a cohort's pre/post uplift is
/// statistically significant.
///
/// # Example
/// ```
/// use uplift::config::SignificanceConfig;
///
/// let config = SignificanceConfig::default();
/// assert_eq!(config.significance_level, 0.05); // 95% confidence
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignificanceConfig {
    /// Statistical significance level (alpha) for the two-tailed test
    ///
    /// - 0.05 (default): 95% confidence level
    /// - 0.01: 99% confidence, stricter
    /// - 0.10: 90% confidence, looser
    pub significance_level: f64,

    /// Minimum number of paired subjects before a verdict is attempted
    ///
    /// The t-test itself needs 2 pairs; larger cohorts give more reliable
    /// p-values, so installations can require more.
    ///
    /// Default: 2 pairs minimum
    pub min_pairs: usize,
}

impl Default for SignificanceConfig {
    fn default() -> Self {
        Self {
            significance_level: 0.05, // 95% confidence (standard in science)
            min_pairs: 2,             // bare minimum for a defined t-statistic
        }
    }
}

impl SignificanceConfig {
    /// Strict configuration (fewer false positives, more false negatives).
    pub fn strict() -> Self {
        Self {
            significance_level: 0.01, // 99% confidence
            min_pairs: 5,
        }
    }

    /// Permissive configuration (flags weaker effects earlier).
    pub fn permissive() -> Self {
        Self {
            significance_level: 0.10, // 90% confidence
            min_pairs: 2,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.significance_level) {
            return Err(format!(
                "significance_level must be in [0, 1], got {}",
                self.significance_level
            ));
        }

        if self.min_pairs < 2 {
            return Err(format!(
                "min_pairs must be >= 2 for a paired t-test, got {}",
                self.min_pairs
            ));
        }

        Ok(())
    }
}
