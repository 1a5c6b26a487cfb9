// Chi-square goodness-of-fit testing for color frequencies
//
// Split in three parts:
// - chi_square: statistic and p-value, no decisions
// - config: significance level (alpha) with presets and validation
// - verdict: turns a p-value and alpha into a decision and narrative
//
// The p-value comes from the chi-square survival function in statrs, which is
// the regularized upper incomplete gamma function Q(df/2, x/2).

mod chi_square;
mod config;
mod verdict;

pub use chi_square::{
    chi_square_goodness_of_fit, chi_square_uniform_colors, uniform_expectation, TestResult,
};
pub use config::TestConfig;
pub use verdict::{assess, Assessment, Verdict};
