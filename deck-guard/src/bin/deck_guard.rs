//! Command line front end: validate card collection CSVs and optionally
//! compare them with a recommended cardlist.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use deck_guard::cards::{CardCollection, DeckComparison};
use deck_guard::core::ValidationReport;
use deck_guard::formatters::{
    FormatterConfig, HumanFormatter, JsonFormatter, MarkdownFormatter, ResultFormatter,
};
use deck_guard::log_data_op;
use deck_guard::logging::setup::{init_logging, LoggingConfig};
use deck_guard::logging::LogConfig;
use deck_guard::sources::{expand_globs, CsvOptions, CsvSource};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "deck-guard", version, about = "Validate card collection CSV imports")]
struct Cli {
    /// CSV files or glob patterns to validate
    #[arg(required = true)]
    patterns: Vec<String>,

    /// Output format for each report
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Disable ANSI colors in human output
    #[arg(long)]
    no_color: bool,

    /// Maximum number of findings to print per file (-1 for all)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    max_issues: i32,

    /// Recommended cardlist, one card name per line
    #[arg(short, long)]
    recommended: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn formatter_config(&self) -> FormatterConfig {
        FormatterConfig::default()
            .with_colors(!self.no_color)
            .with_max_issues(self.max_issues)
    }

    fn csv_options(&self) -> Result<CsvOptions> {
        let delimiter = u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .with_context(|| format!("delimiter {:?} is not a single ASCII byte", self.delimiter))?;
        Ok(CsvOptions::default().with_delimiter(delimiter))
    }

    /// Prints one file's outcome to stdout.
    ///
    /// JSON output is one compact object per line, so a run over several
    /// files stays machine readable.
    fn print_outcome(&self, path: &Path, outcome: &FileOutcome) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let report = JsonFormatter::with_config(self.formatter_config()).to_value(&outcome.report);
                let mut document = serde_json::json!({
                    "path": path.display().to_string(),
                    "report": report,
                });
                if let Some(comparison) = &outcome.comparison {
                    document["comparison"] = serde_json::to_value(comparison)?;
                }
                println!("{document}");
            }
            OutputFormat::Human => {
                let formatter = HumanFormatter::with_config(self.formatter_config());
                print_text(path, &formatter, outcome)?;
            }
            OutputFormat::Markdown => {
                let formatter = MarkdownFormatter::with_config(self.formatter_config());
                print_text(path, &formatter, outcome)?;
            }
        }
        Ok(())
    }
}

/// The report for one file, plus its comparison when one was requested and
/// the file was valid.
struct FileOutcome {
    report: ValidationReport,
    comparison: Option<DeckComparison>,
}

fn load_recommended(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read recommended list {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn check_file(
    path: &Path,
    options: &CsvOptions,
    recommended: Option<&[String]>,
) -> Result<FileOutcome> {
    let table = CsvSource::with_options(path, options.clone()).load()?;
    let report = table.validate();

    let comparison = match recommended {
        Some(recommended) if report.is_valid() => {
            Some(CardCollection::from_table(&table)?.compare(recommended))
        }
        _ => None,
    };

    Ok(FileOutcome { report, comparison })
}

fn print_text(path: &Path, formatter: &dyn ResultFormatter, outcome: &FileOutcome) -> Result<()> {
    println!("{}", path.display());
    println!("{}", formatter.format(&outcome.report)?);

    if let Some(comparison) = &outcome.comparison {
        println!(
            "Owned {} of {} recommended cards ({:.0}%)",
            comparison.owned.len(),
            comparison.owned.len() + comparison.missing.len(),
            comparison.coverage() * 100.0
        );
        for name in &comparison.missing {
            println!("   missing: {name}");
        }
        println!();
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<bool> {
    let log_config = if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::default()
    };

    let paths = expand_globs(&cli.patterns)?;
    log_data_op!(log_config, files = paths.len(), "Expanded input patterns");

    let options = cli.csv_options()?;
    let recommended = cli
        .recommended
        .as_deref()
        .map(load_recommended)
        .transpose()?;

    let mut all_valid = true;
    for path in &paths {
        debug!(path = %path.display(), "Checking file");
        let outcome = check_file(path, &options, recommended.as_deref())
            .with_context(|| format!("failed to check {}", path.display()))?;
        cli.print_outcome(path, &outcome)?;
        all_valid &= outcome.report.is_valid();
    }

    Ok(all_valid)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::development()
    } else {
        LoggingConfig::default()
    }
    .with_json_format(cli.json_logs);
    if let Err(e) = init_logging(logging) {
        eprintln!("failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "deck-guard failed");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
