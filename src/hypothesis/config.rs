// Decision-rule configuration for the color uniformity test

use serde::{Deserialize, Serialize};

/// Significance settings used when turning a p-value into a verdict
///
/// # Example
/// ```
/// use colortally::hypothesis::TestConfig;
///
/// let config = TestConfig::default();
/// assert_eq!(config.significance_level, 0.05); // 95% confidence
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestConfig {
    /// Statistical significance level (alpha)
    ///
    /// The null hypothesis "all colors are equally likely" is rejected when
    /// `p_value < significance_level`.
    /// - 0.05 (default): 95% confidence
    /// - 0.01: stricter, fewer false rejections
    /// - 0.10: looser
    pub significance_level: f64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            significance_level: 0.05,
        }
    }
}

impl TestConfig {
    /// 99% confidence
    pub fn strict() -> Self {
        Self {
            significance_level: 0.01,
        }
    }

    /// 90% confidence
    pub fn permissive() -> Self {
        Self {
            significance_level: 0.10,
        }
    }

    /// Configuration with a specific alpha
    pub fn with_significance_level(significance_level: f64) -> Self {
        Self { significance_level }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(format!(
                "significance_level must be in (0, 1), got {}",
                self.significance_level
            ));
        }
        Ok(())
    }

    /// Confidence level as a percentage
    pub fn confidence_percent(&self) -> f64 {
        (1.0 - self.significance_level) * 100.0
    }
}
