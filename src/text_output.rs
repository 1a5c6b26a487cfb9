//! Human-readable terminal report

use crate::category::Category;
use crate::hypothesis::uniform_expectation;
use crate::summary::Summary;
use std::fmt::Write;

/// Width of the longest bar in the frequency chart
const BAR_WIDTH: u64 = 40;

/// Render the full report as plain text
pub fn render(summary: &Summary) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, summary);
    out
}

fn write_report(out: &mut String, summary: &Summary) -> std::fmt::Result {
    writeln!(out, "=== M&M Color Frequencies ===")?;
    writeln!(
        out,
        "So far, {} students have participated.",
        summary.participants
    )?;
    writeln!(out)?;

    for share in &summary.color_shares {
        write!(out, "{:>8}: {:>5.1}%  ", share.category, share.percent)?;
    }
    writeln!(out)?;
    writeln!(out, "Average per Bag: {}", summary.average_per_bag)?;
    writeln!(out)?;

    write_table(out, summary)?;
    writeln!(out)?;
    write_chart(out, summary)?;
    writeln!(out)?;
    write_test(out, summary)?;

    Ok(())
}

fn write_table(out: &mut String, summary: &Summary) -> std::fmt::Result {
    writeln!(out, "=== Your M&M Data ({} rows) ===", summary.table.len())?;
    write!(out, "{:<8}", "Grade")?;
    for category in Category::ALL {
        write!(out, "{:>8}", category.name())?;
    }
    writeln!(out, "{:>8}", "total")?;
    writeln!(out, "{}", "─".repeat(8 * 7))?;

    for row in &summary.table {
        write!(out, "{:<8}", row.grade)?;
        for count in row.counts.values() {
            write!(out, "{:>8}", count)?;
        }
        writeln!(out, "{:>8}", row.total)?;
    }
    Ok(())
}

fn write_chart(out: &mut String, summary: &Summary) -> std::fmt::Result {
    let chart = &summary.chart;
    writeln!(out, "=== {} ===", chart.title)?;

    let max = chart.bars.iter().map(|b| b.sum).max().unwrap_or(0);
    for bar in &chart.bars {
        let len = bar_length(bar.sum, max);
        writeln!(
            out,
            "{:>8} | {:<width$} {}",
            bar.category,
            "█".repeat(len),
            bar.sum,
            width = BAR_WIDTH as usize
        )?;
    }

    if let Some(line) = chart.reference_line {
        writeln!(out, "Expected per color if all equally likely: {:.1}", line)?;
    }
    Ok(())
}

/// Bar length scaled to the largest sum; widened so huge counts cannot overflow
fn bar_length(sum: u64, max: u64) -> usize {
    if max == 0 {
        return 0;
    }
    (u128::from(sum) * u128::from(BAR_WIDTH) / u128::from(max)) as usize
}

fn write_test(out: &mut String, summary: &Summary) -> std::fmt::Result {
    let test = &summary.test;
    writeln!(out, "=== Chi-Square Test ===")?;
    writeln!(out, "H0: The frequencies of each color are the same.")?;
    writeln!(out, "Ha: The frequencies of each color are different.")?;
    let expectation: Vec<String> = uniform_expectation()
        .values()
        .iter()
        .map(|e| format!("{}", e))
        .collect();
    writeln!(out, "Expectation = [{}]", expectation.join(", "))?;
    writeln!(out)?;
    writeln!(out, "Chi-Square Statistic: {:.2}", test.result.statistic)?;
    writeln!(out, "p-value:              {:.2}", test.result.p_value)?;
    writeln!(
        out,
        "Critical Value alpha: {} ({:.0}% confidence)",
        test.config.significance_level,
        test.config.confidence_percent()
    )?;
    writeln!(out)?;
    write!(out, "{}", test.to_report_string())?;
    Ok(())
}
