//! Dashboard summary: every number the report shows, computed in one place
//!
//! The summary is built on demand from an immutable dataset and the view and
//! test settings. Output formatters only read it.

use crate::aggregate::{
    aggregate_proportions, average_per_row, group_sum_by_category, row_proportions, select_all,
    select_tail, CategorySum, Subset,
};
use crate::category::{Category, CategoryArray};
use crate::config::ViewConfig;
use crate::dataset::Dataset;
use crate::hypothesis::{assess, chi_square_uniform_colors, Assessment, TestConfig};
use anyhow::{Context, Result};
use serde::Serialize;

/// Dataset-wide share of one color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorShare {
    pub category: Category,
    pub proportion: f64,
    /// Percentage rounded to one decimal place
    pub percent: f64,
}

/// One row of the "your data" table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub grade: String,
    pub counts: CategoryArray<u64>,
    pub total: u64,
    /// None when the row total is zero
    pub proportions: Option<CategoryArray<f64>>,
}

/// Bar chart of color frequencies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub bars: Vec<CategorySum>,
    /// Expected count per color under equal likelihood (whole-data chart only)
    pub reference_line: Option<f64>,
}

/// Everything the report displays
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub participants: usize,
    pub color_shares: Vec<ColorShare>,
    pub average_per_bag: u64,
    pub table: Vec<TableRow>,
    pub chart: ChartSeries,
    pub test: Assessment,
}

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn table_rows(subset: &Subset<'_>) -> Vec<TableRow> {
    subset
        .rows()
        .iter()
        .map(|row| TableRow {
            grade: row.grade().to_string(),
            counts: *row.counts(),
            total: row.total(),
            proportions: row_proportions(row).defined(),
        })
        .collect()
}

/// Compute the dashboard summary
///
/// The chi-square test always runs on the whole dataset's aggregate
/// proportions; the view only selects what the table and chart show.
///
/// # Errors
/// Fails when the dataset is empty or totals zero, when `view.tail` is out of
/// range, or when the test configuration is invalid.
pub fn summarize(dataset: &Dataset, view: &ViewConfig, test_config: &TestConfig) -> Result<Summary> {
    let all = select_all(dataset);
    let proportions =
        aggregate_proportions(&all).context("Cannot compute color shares for this dataset")?;

    let color_shares = proportions
        .iter()
        .map(|(category, &proportion)| ColorShare {
            category,
            proportion,
            percent: round1(proportion * 100.0),
        })
        .collect();

    let average_per_bag = average_per_row(&all)?;

    let tail = match view.tail {
        Some(n) => select_tail(dataset, n)?,
        None => all,
    };
    tracing::debug!("View shows {} of {} rows", tail.len(), dataset.len());

    let chart = if view.whole_data {
        ChartSeries {
            title: "Frequency of Colors in M&M Data".to_string(),
            bars: group_sum_by_category(&all),
            reference_line: Some(all.grand_total() as f64 / Category::ALL.len() as f64),
        }
    } else {
        ChartSeries {
            title: "Frequency of Colors in Your M&M Data".to_string(),
            bars: group_sum_by_category(&tail),
            reference_line: None,
        }
    };

    let result = chi_square_uniform_colors(&proportions)?;
    let test = assess(&result, test_config)?;

    Ok(Summary {
        participants: dataset.len(),
        color_shares,
        average_per_bag,
        table: table_rows(&tail),
        chart,
        test,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RawRow;
    use crate::error::AnalysisError;
    use crate::hypothesis::Verdict;

    fn dataset() -> Dataset {
        Dataset::from_raw_rows(&[
            RawRow::new("9", [4, 3, 5, 2, 6]),
            RawRow::new("10", [3, 6, 2, 4, 5]),
            RawRow::new("11", [0, 0, 0, 0, 0]),
            RawRow::new("12", [1, 2, 3, 4, 11]),
        ])
        .unwrap()
    }

    #[test]
    fn test_summary_headline_numbers() {
        let summary = summarize(&dataset(), &ViewConfig::default(), &TestConfig::default()).unwrap();
        assert_eq!(summary.participants, 4);
        // 61 candies over 4 bags
        assert_eq!(summary.average_per_bag, 15);

        let blue = summary.color_shares[0];
        assert_eq!(blue.category, Category::Blue);
        assert!((blue.proportion - 8.0 / 61.0).abs() < 1e-12);
        assert_eq!(blue.percent, 13.1);
    }

    #[test]
    fn test_summary_default_view_shows_every_row() {
        let summary = summarize(&dataset(), &ViewConfig::default(), &TestConfig::default()).unwrap();
        assert_eq!(summary.table.len(), 4);
        assert!(summary.table[2].proportions.is_none());
        assert!(summary.table[0].proportions.is_some());
    }

    #[test]
    fn test_summary_tail_view() {
        let view = ViewConfig {
            tail: Some(2),
            whole_data: false,
        };
        let summary = summarize(&dataset(), &view, &TestConfig::default()).unwrap();
        let grades: Vec<&str> = summary.table.iter().map(|r| r.grade.as_str()).collect();
        assert_eq!(grades, vec!["11", "12"]);

        assert_eq!(summary.chart.title, "Frequency of Colors in Your M&M Data");
        assert_eq!(summary.chart.bars[4].sum, 11);
        assert!(summary.chart.reference_line.is_none());
    }

    #[test]
    fn test_summary_whole_data_chart() {
        let view = ViewConfig {
            tail: Some(1),
            whole_data: true,
        };
        let summary = summarize(&dataset(), &view, &TestConfig::default()).unwrap();
        assert_eq!(summary.chart.title, "Frequency of Colors in M&M Data");
        assert_eq!(summary.chart.bars[0].sum, 8);
        assert_eq!(summary.chart.reference_line, Some(61.0 / 5.0));
        assert_eq!(summary.table.len(), 1);
    }

    #[test]
    fn test_summary_tail_out_of_range() {
        let view = ViewConfig {
            tail: Some(5),
            whole_data: false,
        };
        let err = summarize(&dataset(), &view, &TestConfig::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AnalysisError>(),
            Some(&AnalysisError::Range { n: 5, len: 4 })
        );
    }

    #[test]
    fn test_summary_runs_test_on_whole_dataset() {
        let view = ViewConfig {
            tail: Some(1),
            whole_data: false,
        };
        let tail_only = summarize(&dataset(), &view, &TestConfig::default()).unwrap();
        let everything =
            summarize(&dataset(), &ViewConfig::default(), &TestConfig::default()).unwrap();
        assert_eq!(tail_only.test.result, everything.test.result);
        assert_eq!(everything.test.verdict, Verdict::FailToReject);
    }

    #[test]
    fn test_summary_zero_total_dataset() {
        let zeros = Dataset::from_raw_rows(&[RawRow::new("9", [0; 5])]).unwrap();
        let err = summarize(&zeros, &ViewConfig::default(), &TestConfig::default()).unwrap_err();
        assert_eq!(
            err.root_cause().downcast_ref::<AnalysisError>(),
            Some(&AnalysisError::EmptySubset)
        );
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(13.114754), 13.1);
        assert_eq!(round1(26.25), 26.3);
        assert_eq!(round1(20.0), 20.0);
    }
}
