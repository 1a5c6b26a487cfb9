use anyhow::{Context, Result};
use clap::Parser;
use colortally::{
    cli::{Cli, OutputFormat},
    config::AppConfig,
    csv_output::{CsvOutput, CsvSumsOutput},
    dataset::Dataset,
    json_output::JsonOutput,
    summary::{summarize, Summary},
    text_output,
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Merge the config file (if any) with command-line overrides
fn resolve_config(args: &Cli) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    if let Some(alpha) = args.alpha {
        config.test.significance_level = alpha;
    }
    if args.tail.is_some() {
        config.view.tail = args.tail;
    }
    if args.whole_data {
        config.view.whole_data = true;
    }

    config.test.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(config)
}

/// Render the summary in the requested format
fn render(summary: &Summary, format: OutputFormat, proportions: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text_output::render(summary)),
        OutputFormat::Json => JsonOutput::new(summary).to_json(),
        OutputFormat::Csv => {
            let mut table = CsvOutput::new(proportions);
            for row in &summary.table {
                table.add_row(row.clone());
            }

            let mut sums = CsvSumsOutput::new();
            for bar in &summary.chart.bars {
                sums.add_sum(*bar);
            }

            Ok(format!("{}\n{}", table.to_csv(), sums.to_csv()))
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = resolve_config(&args)?;
    tracing::debug!("Resolved configuration: {:?}", config);

    let dataset = Dataset::from_csv_path(&args.data)
        .with_context(|| format!("Failed to load dataset {}", args.data.display()))?;

    let summary = summarize(&dataset, &config.view, &config.test)?;
    let output = render(&summary, args.format, args.proportions)?;
    print!("{}", output);

    Ok(())
}
