//! sheetdiff CLI - workbook comparison tool

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use sheetdiff::prelude::*;
use sheetdiff::{render_json_pretty, DEFAULT_LONG_VALUE_THRESHOLD};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "sheetdiff")]
#[command(
    author,
    version,
    about = "Compare two spreadsheet workbooks cell by cell and write a change report"
)]
struct Cli {
    /// Old workbook (xlsx, xlsm, xlsb, xls, ods, csv, tsv)
    old: PathBuf,

    /// New workbook
    new: PathBuf,

    /// Output file, or "-" for stdout
    #[arg(short, long, default_value = "diff_report.md")]
    output: PathBuf,

    /// Values longer than this many characters are moved out of the summary table
    #[arg(short, long, default_value_t = DEFAULT_LONG_VALUE_THRESHOLD)]
    threshold: usize,

    /// Report format
    #[arg(short, long, value_enum, default_value = "markdown")]
    format: Format,

    /// Language of report headings
    #[arg(short, long, value_enum, default_value = "en")]
    labels: Language,

    /// Field delimiter for CSV input (default: comma; tab for .tsv)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Sheet name for CSV input (default: file name without extension)
    #[arg(long)]
    csv_sheet_name: Option<String>,

    /// Exit with status 1 when the workbooks differ
    #[arg(long)]
    exit_code: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Language {
    En,
    Ja,
}

impl Language {
    fn labels(self) -> ReportLabels {
        match self {
            Language::En => ReportLabels::english(),
            Language::Ja => ReportLabels::japanese(),
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let options = CompareOptions {
        diff: DiffOptions::with_threshold(cli.threshold),
        extract: ExtractOptions {
            delimiter: cli.delimiter.map(delimiter_byte).transpose()?,
            csv_sheet_name: cli.csv_sheet_name.clone(),
            ..Default::default()
        },
    };

    let mut observer = LogObserver;
    let result = compare_files(&cli.old, &cli.new, &options, &mut observer)?;

    let source = cli.old.display().to_string();
    let target = cli.new.display().to_string();
    let report = match cli.format {
        Format::Markdown => {
            let report_options = ReportOptions::default().with_labels(cli.labels.labels());
            render_with(&result, &source, &target, &report_options, &mut observer)
        }
        Format::Json => {
            let mut json = render_json_pretty(&result, &source, &target)
                .context("Failed to serialize report")?;
            json.push('\n');
            json
        }
    };

    write_report(&cli.output, &report)?;

    log::info!(
        "{} changed cells, {} sheets added, {} removed",
        result.total_changes(),
        result.added_sheets().len(),
        result.removed_sheets().len()
    );

    if cli.exit_code && !result.is_identical() {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, 2) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn delimiter_byte(c: char) -> Result<u8> {
    if !c.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", c);
    }
    Ok(c as u8)
}

fn write_report(output: &Path, report: &str) -> Result<()> {
    if output == Path::new("-") {
        io::stdout()
            .write_all(report.as_bytes())
            .context("Failed to write to stdout")?;
        return Ok(());
    }

    std::fs::write(output, report)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;
    log::info!("wrote report to '{}'", output.display());
    Ok(())
}
