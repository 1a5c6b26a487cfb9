//! colortally - candy color frequency explorer
//!
//! This library loads a dataset of per-student candy color counts, computes
//! per-row and aggregate color proportions over the whole dataset or its most
//! recent rows, and runs a chi-square goodness-of-fit test of whether every
//! color is equally likely.
//!
//! # Example
//! ```
//! use colortally::aggregate::{aggregate_proportions, select_all};
//! use colortally::dataset::{Dataset, RawRow};
//! use colortally::hypothesis::{assess, chi_square_uniform_colors, TestConfig, Verdict};
//!
//! let dataset = Dataset::from_raw_rows(&[
//!     RawRow::new("9", [4, 4, 4, 4, 4]),
//!     RawRow::new("10", [3, 5, 4, 4, 4]),
//! ])
//! .unwrap();
//!
//! let proportions = aggregate_proportions(&select_all(&dataset)).unwrap();
//! let result = chi_square_uniform_colors(&proportions).unwrap();
//! let assessment = assess(&result, &TestConfig::default()).unwrap();
//! assert_eq!(assessment.verdict, Verdict::FailToReject);
//! ```

pub mod aggregate;
pub mod category;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod dataset;
pub mod error;
pub mod hypothesis;
pub mod json_output;
pub mod summary;
pub mod text_output;
