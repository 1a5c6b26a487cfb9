//! CLI argument parsing for colortally

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report (default)
    Text,
    /// JSON summary for machine parsing
    Json,
    /// CSV table and color totals for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "colortally")]
#[command(version)]
#[command(about = "Explore candy color frequencies and test them for uniformity", long_about = None)]
pub struct Cli {
    /// CSV dataset with columns Grade, Blue, Green, Pink, Purple, Yellow
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Show only the last N rows in the table and chart (1..=rows)
    #[arg(short = 'n', long = "tail", value_name = "N", allow_negative_numbers = true)]
    pub tail: Option<i64>,

    /// Chart the whole dataset with the uniform reference line
    #[arg(short = 'w', long = "whole-data")]
    pub whole_data: bool,

    /// Significance level for the chi-square test (default: 0.05)
    #[arg(short = 'a', long = "alpha", value_name = "ALPHA")]
    pub alpha: Option<f64>,

    /// TOML configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Include per-row proportions in CSV output
    #[arg(long = "proportions")]
    pub proportions: bool,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
