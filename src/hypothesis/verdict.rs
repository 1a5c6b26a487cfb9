// Verdict for the color uniformity test
//
// H0: every color is equally likely.
// Ha: the color frequencies differ.
// H0 is rejected when p < alpha. The tester never makes this call itself.

use crate::hypothesis::chi_square::TestResult;
use crate::hypothesis::config::TestConfig;
use anyhow::Result;
use serde::Serialize;

/// Final decision on the null hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// p < alpha: the colors are not equally likely
    RejectNull,

    /// p >= alpha: no evidence against equal likelihood
    FailToReject,
}

impl Verdict {
    pub fn rejects_null(self) -> bool {
        matches!(self, Verdict::RejectNull)
    }
}

/// A test result together with the decision drawn from it
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub verdict: Verdict,
    pub result: TestResult,
    pub config: TestConfig,
}

impl Assessment {
    /// Generate human-readable narrative
    pub fn to_report_string(&self) -> String {
        let alpha = self.config.significance_level;
        let mut report = String::new();

        match self.verdict {
            Verdict::RejectNull => {
                report.push_str(&format!(
                    "The p-value is less than {}, so we can reject the null hypothesis.\n",
                    alpha
                ));
                report.push_str(
                    "The frequencies of the colors are significantly different from being the same.\n",
                );
            }
            Verdict::FailToReject => {
                report.push_str(&format!(
                    "The p-value is greater than {}, so we cannot reject the null hypothesis.\n",
                    alpha
                ));
                report.push_str(
                    "The frequencies of the colors are not significantly different from being the same.\n",
                );
            }
        }

        report
    }
}

/// Compare a test result against the configured significance level
///
/// # Example
/// ```
/// use colortally::hypothesis::{assess, chi_square_goodness_of_fit, TestConfig, Verdict};
///
/// let result = chi_square_goodness_of_fit(&[0.2, 0.2, 0.2, 0.2, 0.2], None).unwrap();
/// let assessment = assess(&result, &TestConfig::default()).unwrap();
/// assert_eq!(assessment.verdict, Verdict::FailToReject);
/// ```
pub fn assess(result: &TestResult, config: &TestConfig) -> Result<Assessment> {
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let verdict = if result.p_value < config.significance_level {
        Verdict::RejectNull
    } else {
        Verdict::FailToReject
    };

    tracing::info!(
        "Uniformity test: p={:.4}, alpha={}, verdict={:?}",
        result.p_value,
        config.significance_level,
        verdict
    );

    Ok(Assessment {
        verdict,
        result: *result,
        config: *config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_p(p_value: f64) -> TestResult {
        TestResult {
            statistic: 1.0,
            p_value,
            degrees_of_freedom: 4,
        }
    }

    #[test]
    fn test_assess_rejects_below_alpha() {
        let assessment = assess(&result_with_p(0.01), &TestConfig::default()).unwrap();
        assert_eq!(assessment.verdict, Verdict::RejectNull);
        assert!(assessment.verdict.rejects_null());
    }

    #[test]
    fn test_assess_keeps_null_at_or_above_alpha() {
        let config = TestConfig::default();
        assert_eq!(
            assess(&result_with_p(0.05), &config).unwrap().verdict,
            Verdict::FailToReject
        );
        assert_eq!(
            assess(&result_with_p(0.8), &config).unwrap().verdict,
            Verdict::FailToReject
        );
    }

    #[test]
    fn test_assess_respects_alpha() {
        let result = result_with_p(0.03);
        assert_eq!(
            assess(&result, &TestConfig::default()).unwrap().verdict,
            Verdict::RejectNull
        );
        assert_eq!(
            assess(&result, &TestConfig::strict()).unwrap().verdict,
            Verdict::FailToReject
        );
    }

    #[test]
    fn test_assess_invalid_config() {
        let config = TestConfig::with_significance_level(2.0);
        assert!(assess(&result_with_p(0.01), &config).is_err());
    }

    #[test]
    fn test_report_string_reject() {
        let assessment = assess(&result_with_p(0.001), &TestConfig::default()).unwrap();
        let report = assessment.to_report_string();
        assert!(report.contains("can reject the null hypothesis"));
        assert!(report.contains("0.05"));
    }

    #[test]
    fn test_report_string_fail_to_reject() {
        let assessment = assess(&result_with_p(0.5), &TestConfig::default()).unwrap();
        let report = assessment.to_report_string();
        assert!(report.contains("cannot reject the null hypothesis"));
        assert!(report.contains("not significantly different"));
    }
}
