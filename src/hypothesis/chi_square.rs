// Chi-square goodness-of-fit test against a (default uniform) expectation
//
// statistic = sum((O_i - E_i)^2 / E_i) over categories, in input order
// df        = k - 1
// p-value   = survival function of chi-square(df) at the statistic, i.e. the
//             regularized upper incomplete gamma Q(df/2, statistic/2)
//
// The tester only reports numbers. Accepting or rejecting the null hypothesis
// is done by `assess` in the verdict module with a caller-supplied alpha.

use crate::category::{Category, CategoryArray};
use crate::error::{AnalysisError, Result};
use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Outcome of a goodness-of-fit test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestResult {
    /// Chi-square statistic, never negative
    pub statistic: f64,

    /// Probability of a statistic at least this large under the null hypothesis
    pub p_value: f64,

    /// Degrees of freedom (categories - 1)
    pub degrees_of_freedom: usize,
}

/// Chi-square goodness-of-fit test
///
/// With `expected = None` every category is expected with probability
/// `1 / observed.len()`.
///
/// # Errors
/// * [`AnalysisError::InsufficientCategories`] for fewer than 2 observed values
/// * [`AnalysisError::DimensionMismatch`] when the lengths differ
/// * [`AnalysisError::ZeroExpectation`] when an expected value is not positive
/// * [`AnalysisError::NonFiniteObservation`] when an observed value is NaN or infinite
///
/// # Example
/// ```
/// use colortally::hypothesis::chi_square_goodness_of_fit;
///
/// // Four candies, all blue, against 0.8 expected per color
/// let result = chi_square_goodness_of_fit(&[4.0, 0.0, 0.0, 0.0, 0.0], Some(&[0.8; 5])).unwrap();
/// assert!((result.statistic - 16.0).abs() < 1e-9);
/// assert_eq!(result.degrees_of_freedom, 4);
/// assert!(result.p_value < 0.05);
/// ```
pub fn chi_square_goodness_of_fit(observed: &[f64], expected: Option<&[f64]>) -> Result<TestResult> {
    let k = observed.len();
    if k < 2 {
        return Err(AnalysisError::InsufficientCategories { found: k });
    }

    let uniform;
    let expected = match expected {
        Some(expected) => {
            if expected.len() != k {
                return Err(AnalysisError::DimensionMismatch {
                    observed: k,
                    expected: expected.len(),
                });
            }
            expected
        }
        None => {
            uniform = vec![1.0 / k as f64; k];
            uniform.as_slice()
        }
    };

    if let Some(index) = expected.iter().position(|&e| !(e > 0.0 && e.is_finite())) {
        return Err(AnalysisError::ZeroExpectation { index });
    }
    if let Some(index) = observed.iter().position(|o| !o.is_finite()) {
        return Err(AnalysisError::NonFiniteObservation { index });
    }

    let statistic: f64 = observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| (o - e).powi(2) / e)
        .sum();

    let degrees_of_freedom = k - 1;
    let distribution = ChiSquared::new(degrees_of_freedom as f64)
        .map_err(|e| AnalysisError::Distribution(e.to_string()))?;
    let p_value = distribution.sf(statistic).clamp(0.0, 1.0);

    tracing::debug!(
        "chi-square: statistic={:.6}, df={}, p={:.6}",
        statistic,
        degrees_of_freedom,
        p_value
    );

    Ok(TestResult {
        statistic,
        p_value,
        degrees_of_freedom,
    })
}

/// Test whether the colors are equally likely, given their aggregate proportions
///
/// Observed values are proportions (summing to 1) and are compared with the
/// uniform proportion 1/5 per color.
pub fn chi_square_uniform_colors(proportions: &CategoryArray<f64>) -> Result<TestResult> {
    chi_square_goodness_of_fit(proportions.values(), None)
}

/// Expected share of each color when all colors are equally likely
pub fn uniform_expectation() -> CategoryArray<f64> {
    CategoryArray::splat(1.0 / Category::ALL.len() as f64)
}
