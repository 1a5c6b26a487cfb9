//! Row totals, proportions and subset aggregates
//!
//! Every function here is a pure function of its inputs. Zero denominators are
//! reported as [`RowProportions::Undefined`] or [`AnalysisError::EmptySubset`],
//! never as NaN.

use crate::category::{Category, CategoryArray};
use crate::dataset::{Dataset, DerivedRow, RawRow};
use crate::error::{AnalysisError, Result};
use serde::Serialize;

/// Validate raw rows and attach their totals
///
/// Row numbers in errors are 1-based positions in `rows`. The grand total of
/// all rows must fit in a `u64`, so every subset sum computed later does too.
pub fn compute_row_totals(rows: &[RawRow]) -> Result<Vec<DerivedRow>> {
    let mut grand_total = 0u64;
    let mut derived = Vec::with_capacity(rows.len());

    for (i, raw) in rows.iter().enumerate() {
        let row = derive_row(i + 1, raw)?;
        grand_total = grand_total
            .checked_add(row.total())
            .ok_or_else(|| AnalysisError::InvalidRow {
                row: i + 1,
                reason: "dataset total overflows".to_string(),
            })?;
        derived.push(row);
    }

    Ok(derived)
}

fn derive_row(row: usize, raw: &RawRow) -> Result<DerivedRow> {
    let mut counts = CategoryArray::splat(0u64);
    for (category, &value) in raw.counts.iter() {
        counts[category] = u64::try_from(value).map_err(|_| AnalysisError::InvalidRow {
            row,
            reason: format!("{} count is negative ({})", category, value),
        })?;
    }

    let total = counts
        .values()
        .iter()
        .try_fold(0u64, |acc, &c| acc.checked_add(c))
        .ok_or_else(|| AnalysisError::InvalidRow {
            row,
            reason: "row total overflows".to_string(),
        })?;

    Ok(DerivedRow::new(raw.grade.clone(), counts, total))
}

/// Per-row proportions, explicit about the zero-total case
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowProportions {
    /// `count / total` for each category
    Defined(CategoryArray<f64>),
    /// The row total is zero
    Undefined,
}

impl RowProportions {
    /// Proportions if the row total was positive
    pub fn defined(self) -> Option<CategoryArray<f64>> {
        match self {
            RowProportions::Defined(p) => Some(p),
            RowProportions::Undefined => None,
        }
    }
}

/// Proportion of each category within a single row
pub fn row_proportions(row: &DerivedRow) -> RowProportions {
    if row.total() == 0 {
        return RowProportions::Undefined;
    }
    let total = row.total() as f64;
    RowProportions::Defined(row.counts().map(|c| c as f64 / total))
}

/// Borrowed, ordered selection of dataset rows
#[derive(Debug, Clone, Copy)]
pub struct Subset<'a> {
    rows: &'a [DerivedRow],
}

impl<'a> Subset<'a> {
    /// Wrap a slice of validated dataset rows
    pub(crate) fn new(rows: &'a [DerivedRow]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &'a [DerivedRow] {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of row totals
    pub fn grand_total(&self) -> u64 {
        self.rows.iter().map(|r| r.total()).sum()
    }
}

/// Last `n` rows in arrival order
///
/// `n` must lie in `[1, dataset.len()]`; anything else is a
/// [`AnalysisError::Range`], including every `n` on an empty dataset.
pub fn select_tail(dataset: &Dataset, n: i64) -> Result<Subset<'_>> {
    let len = dataset.len();
    let count = usize::try_from(n)
        .ok()
        .filter(|&count| (1..=len).contains(&count))
        .ok_or(AnalysisError::Range { n, len })?;

    let rows = dataset.rows();
    Ok(Subset::new(&rows[len - count..]))
}

/// Every row of the dataset
pub fn select_all(dataset: &Dataset) -> Subset<'_> {
    Subset::new(dataset.rows())
}

/// Total count per category across a subset
fn category_sums(subset: &Subset<'_>) -> CategoryArray<u64> {
    let mut sums = CategoryArray::splat(0u64);
    for row in subset.rows() {
        for (category, &count) in row.counts().iter() {
            sums[category] += count;
        }
    }
    sums
}

/// Share of each category in the summed counts of a subset
///
/// Fails with [`AnalysisError::EmptySubset`] when the subset has no rows or
/// all of its rows total zero.
pub fn aggregate_proportions(subset: &Subset<'_>) -> Result<CategoryArray<f64>> {
    let grand_total = subset.grand_total();
    if grand_total == 0 {
        return Err(AnalysisError::EmptySubset);
    }
    let denominator = grand_total as f64;
    Ok(category_sums(subset).map(|s| s as f64 / denominator))
}

/// A category and its summed count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySum {
    pub category: Category,
    pub sum: u64,
}

/// Per-category totals in fixed category order
pub fn group_sum_by_category(subset: &Subset<'_>) -> Vec<CategorySum> {
    category_sums(subset)
        .iter()
        .map(|(category, &sum)| CategorySum { category, sum })
        .collect()
}

/// Floor of the grand total divided by the number of rows
pub fn average_per_row(subset: &Subset<'_>) -> Result<u64> {
    if subset.is_empty() {
        return Err(AnalysisError::EmptySubset);
    }
    Ok(subset.grand_total() / subset.len() as u64)
}
