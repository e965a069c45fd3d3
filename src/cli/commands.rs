//! Command implementation for the descriptor summarizer CLI
//!
//! Sets up logging, summarizes each requested directory, renders the
//! report and either prints it or writes it to the output file.

use crate::cli::args::Args;
use crate::models::SummaryReport;
use crate::report::{ReportSection, render_document, write_report};
use crate::summarizer::Summarizer;
use anyhow::{Context, Result};
use colored::*;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Totals reported at the end of a run
#[derive(Debug, Clone, Default)]
struct RunStats {
    /// Number of directories summarized
    directories: usize,
    /// Number of descriptors that produced a row
    descriptors: usize,
    /// Number of descriptors that could not be read
    failures: usize,
    elapsed: Duration,
}

/// Main command runner
pub fn run(args: Args) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let summarizer = Summarizer::new(args.summary_config())?;

    let mut reports: Vec<SummaryReport> = Vec::with_capacity(args.directories.len());
    for directory in &args.directories {
        let report = summarizer
            .summarize(directory)
            .with_context(|| format!("Failed to summarize {}", directory.display()))?;
        reports.push(report);
    }

    let sections: Vec<ReportSection<'_>> = reports
        .iter()
        .enumerate()
        .map(|(i, report)| ReportSection::new(args.heading_for(i, &report.directory), report))
        .collect();

    let document = render_document(&sections, args.format).context("Failed to render report")?;

    let stats = RunStats {
        directories: reports.len(),
        descriptors: reports.iter().map(|r| r.rows.len()).sum(),
        failures: reports.iter().map(|r| r.failures.len()).sum(),
        elapsed: start_time.elapsed(),
    };

    report_failures(&reports);

    match &args.output {
        Some(path) => {
            write_report(path, &document)?;
            if !args.quiet {
                println!(
                    "{} {} descriptors from {} directories to {}",
                    "Summarized".bright_green(),
                    stats.descriptors.to_string().bright_white().bold(),
                    stats.directories,
                    path.display().to_string().bright_cyan()
                );
            }
        }
        None => println!("{}", document),
    }

    // Failures are errors, so the count is printed even in quiet mode
    if stats.failures > 0 {
        eprintln!(
            "{} {} of {} descriptors could not be read",
            "Warning:".bright_yellow().bold(),
            stats.failures,
            stats.descriptors + stats.failures
        );
    }

    info!(
        "Summarized {} descriptors ({} failed) in {:.2?}",
        stats.descriptors, stats.failures, stats.elapsed
    );

    Ok(())
}

/// Print descriptors that were skipped, on stderr
fn report_failures(reports: &[SummaryReport]) {
    for failure in reports.iter().flat_map(|r| &r.failures) {
        eprintln!(
            "{} {}: {}",
            "Skipped".bright_yellow(),
            failure.path.display(),
            failure.reason
        );
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ctl_summary={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
