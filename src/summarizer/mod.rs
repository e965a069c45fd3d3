//! Directory summarization of descriptor files.
//!
//! Discovers descriptors in a directory, parses each one in turn and
//! flattens the records into summary rows. Files that cannot be read are
//! collected as failures (or returned as an error in fail-fast mode) so the
//! rest of the directory is still summarized.

pub mod discovery;


use self::discovery::DescriptorDiscovery;

use crate::config::SummaryConfig;
use crate::descriptor::read_descriptor;
use crate::error::Result;
use crate::models::{FileFailure, SummaryReport, SummaryRow};

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::{debug, info};

/// Builds summary reports for descriptor directories
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummaryConfig,
}

impl Summarizer {
    pub fn new(config: SummaryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Summarize every descriptor in `directory`
    pub fn summarize(&self, directory: impl AsRef<Path>) -> Result<SummaryReport> {
        let directory = directory.as_ref();
        let mut files = DescriptorDiscovery::new(directory, self.config.suffix())
            .recursive(self.config.recursive)
            .discover()?;

        if self.config.sort_entries {
            files.sort();
        }

        info!(
            "Summarizing {} descriptor files in {}",
            files.len(),
            directory.display()
        );

        let progress = self.progress_bar(files.len());
        let mut report = SummaryReport::new(directory);

        for path in files {
            progress.set_message(display_name(&path));
            let outcome = self.summarize_file(&path);
            progress.inc(1);

            match outcome {
                Ok(row) => report.rows.push(row),
                Err(error) if self.config.fail_fast => {
                    progress.abandon();
                    return Err(error);
                }
                Err(error) => {
                    debug!("Skipping {}: {}", path.display(), error);
                    report.failures.push(FileFailure {
                        path,
                        reason: error.to_string(),
                    });
                }
            }
        }

        progress.finish_and_clear();

        debug!(
            "Summary of {}: {} rows, {} failures",
            directory.display(),
            report.rows.len(),
            report.failures.len()
        );

        Ok(report)
    }

    /// Summarize several directories, one report each, in the given order
    pub fn summarize_all<P: AsRef<Path>>(&self, directories: &[P]) -> Result<Vec<SummaryReport>> {
        directories.iter().map(|dir| self.summarize(dir)).collect()
    }

    fn summarize_file(&self, path: &Path) -> Result<SummaryRow> {
        let (metadata, stats) = read_descriptor(path, &self.config.extension)?;
        if stats.lines_skipped > 0 {
            debug!(
                "{}: {} malformed lines skipped",
                metadata.file_name(),
                stats.lines_skipped
            );
        }
        Ok(SummaryRow::from(&metadata))
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
