//! Dataset model and CSV loader
//!
//! A dataset is an ordered, immutable sequence of rows. Arrival order is
//! meaningful because tail selection depends on it.
//!
//! # Expected CSV layout
//!
//! ```text
//! Grade,Blue,Green,Pink,Purple,Yellow
//! 9,4,3,5,2,6
//! 10,3,6,2,4,5
//! ```
//!
//! Header names are matched case-insensitively, column order is free and
//! extra columns are ignored.

use crate::aggregate::compute_row_totals;
use crate::category::{Category, CategoryArray, CATEGORY_COUNT};
use crate::error::AnalysisError;
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Name of the label column
pub const GRADE_COLUMN: &str = "Grade";

/// Errors raised while loading a dataset
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error(transparent)]
    Invalid(#[from] AnalysisError),
}

/// A row as read from the source, before validation
///
/// Counts are signed so that a negative value in the source reaches
/// validation instead of failing as a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub grade: String,
    pub counts: CategoryArray<i64>,
}

impl RawRow {
    pub fn new(grade: impl Into<String>, counts: [i64; CATEGORY_COUNT]) -> Self {
        Self {
            grade: grade.into(),
            counts: CategoryArray::new(counts),
        }
    }
}

/// A validated row with its total
///
/// Only built by the crate's row validation, so `total` always equals the
/// sum of `counts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedRow {
    grade: String,
    counts: CategoryArray<u64>,
    total: u64,
}

impl DerivedRow {
    pub(crate) fn new(grade: String, counts: CategoryArray<u64>, total: u64) -> Self {
        Self {
            grade,
            counts,
            total,
        }
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn counts(&self) -> &CategoryArray<u64> {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Count for a single category
    pub fn count(&self, category: Category) -> u64 {
        self.counts[category]
    }
}

/// Immutable, ordered collection of derived rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<DerivedRow>,
}

impl Dataset {
    /// Validate raw rows and compute their totals
    ///
    /// Fails on the first invalid row; no partial dataset is returned.
    pub fn from_raw_rows(rows: &[RawRow]) -> Result<Self, AnalysisError> {
        Ok(Self {
            rows: compute_row_totals(rows)?,
        })
    }

    /// Load a dataset from a CSV file
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        tracing::debug!("Loading dataset from {}", path.display());
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Load a dataset from any CSV source
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut grade_idx = None;
        let mut count_idx: [Option<usize>; CATEGORY_COUNT] = [None; CATEGORY_COUNT];
        for (idx, header) in headers.iter().enumerate() {
            if header.trim().eq_ignore_ascii_case(GRADE_COLUMN) {
                grade_idx.get_or_insert(idx);
            } else if let Some(category) = Category::from_name(header) {
                count_idx[category.index()].get_or_insert(idx);
            }
        }

        let grade_idx =
            grade_idx.ok_or_else(|| LoadError::MissingColumn(GRADE_COLUMN.to_string()))?;
        let mut columns = [0usize; CATEGORY_COUNT];
        for category in Category::ALL {
            columns[category.index()] = count_idx[category.index()]
                .ok_or_else(|| LoadError::MissingColumn(category.name().to_string()))?;
        }
        tracing::debug!("Column layout: grade={}, counts={:?}", grade_idx, columns);

        let mut raw_rows = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            let row = i + 1;

            let grade = record.get(grade_idx).unwrap_or_default().to_string();
            let mut counts = CategoryArray::splat(0i64);
            for category in Category::ALL {
                let field = record.get(columns[category.index()]).unwrap_or_default();
                counts[category] = parse_count(field, category, row)?;
            }

            raw_rows.push(RawRow { grade, counts });
        }

        let dataset = Self::from_raw_rows(&raw_rows)?;
        tracing::info!("Loaded {} rows", dataset.len());
        Ok(dataset)
    }

    /// Rows in arrival order
    pub fn rows(&self) -> &[DerivedRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parse a single count field
fn parse_count(field: &str, category: Category, row: usize) -> Result<i64, AnalysisError> {
    field.parse::<i64>().map_err(|_| AnalysisError::InvalidRow {
        row,
        reason: format!("{} count is not an integer ({:?})", category, field),
    })
}
