//! Typed failures reported by the aggregation and hypothesis-testing core

use thiserror::Error;

/// Errors from the aggregator and the chi-square tester
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("Subset is empty or has a total count of zero")]
    EmptySubset,

    #[error("Row count {n} out of range: must be between 1 and {len}")]
    Range { n: i64, len: usize },

    #[error("Dimension mismatch: {observed} observed values but {expected} expected values")]
    DimensionMismatch { observed: usize, expected: usize },

    #[error("Insufficient categories: need at least 2, got {found}")]
    InsufficientCategories { found: usize },

    #[error("Expected value at index {index} must be positive")]
    ZeroExpectation { index: usize },

    #[error("Observed value at index {index} is not finite")]
    NonFiniteObservation { index: usize },

    #[error("Chi-square distribution unavailable: {0}")]
    Distribution(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
