//! CSV output format for the data table and color totals
//!
//! Spreadsheet-friendly export of the rows currently in view.

use crate::aggregate::CategorySum;
use crate::category::Category;
use crate::summary::TableRow;

/// CSV formatter for table rows
#[derive(Debug)]
pub struct CsvOutput {
    rows: Vec<TableRow>,
    include_proportions: bool,
}

impl CsvOutput {
    /// Create a new CSV output formatter
    pub fn new(include_proportions: bool) -> Self {
        Self {
            rows: Vec::new(),
            include_proportions,
        }
    }

    /// Add a table row to the output
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Generate CSV header row based on enabled flags
    fn header(&self) -> String {
        let mut headers: Vec<String> = vec!["grade".to_string()];
        headers.extend(Category::ALL.iter().map(|c| c.name().to_string()));
        headers.push("total".to_string());

        if self.include_proportions {
            headers.extend(
                Category::ALL
                    .iter()
                    .map(|c| format!("{}_prop", c.name().to_lowercase())),
            );
        }

        headers.join(",")
    }

    /// Escape CSV field (handle commas, quotes, line breaks)
    fn escape_field(field: &str) -> String {
        if field.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Format a table row as CSV row
    fn format_row(&self, row: &TableRow) -> String {
        let mut fields = vec![Self::escape_field(&row.grade)];
        fields.extend(row.counts.values().iter().map(|c| c.to_string()));
        fields.push(row.total.to_string());

        if self.include_proportions {
            match row.proportions {
                Some(ref proportions) => {
                    fields.extend(proportions.values().iter().map(|p| format!("{:.6}", p)));
                }
                // Undefined for zero-total rows
                None => fields.extend(std::iter::repeat(String::new()).take(Category::ALL.len())),
            }
        }

        fields.join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.header());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.format_row(row));
            output.push('\n');
        }

        output
    }
}

/// CSV formatter for per-color totals
#[derive(Debug, Default)]
pub struct CsvSumsOutput {
    sums: Vec<CategorySum>,
}

impl CsvSumsOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sum(&mut self, sum: CategorySum) {
        self.sums.push(sum);
    }

    pub fn to_csv(&self) -> String {
        let mut output = String::from("color,frequency\n");
        for sum in &self.sums {
            output.push_str(sum.category.name());
            output.push(',');
            output.push_str(&sum.sum.to_string());
            output.push('\n');
        }
        output
    }
}
