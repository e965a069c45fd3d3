//! Command-line argument definitions for the descriptor summarizer
//!
//! Defines the CLI surface using the clap derive API and maps it onto
//! [`SummaryConfig`].

use crate::config::SummaryConfig;
use crate::constants::DESCRIPTOR_EXTENSION;
use crate::error::{CtlError, Result};
use crate::report::TableFormat;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Summarize GrADS data descriptor (.ctl) files
///
/// Parses every descriptor in the given directories and renders one
/// summary table per directory: title, axis sizes, variables and the
/// referenced data file.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ctl-summary",
    version,
    about = "Summarize GrADS data descriptor (.ctl) files as report tables"
)]
pub struct Args {
    /// Directories to scan for descriptor files
    #[arg(value_name = "DIRECTORY", required = true, num_args = 1..)]
    pub directories: Vec<PathBuf>,

    /// Write the report to this file instead of standard output
    ///
    /// Parent directories are created if they don't exist.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report table format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = TableFormat::Rst)]
    pub format: TableFormat,

    /// Section heading for each directory, in the same order as the directories
    ///
    /// Directories without a heading use their path as the heading.
    #[arg(long = "heading", value_name = "TEXT")]
    pub headings: Vec<String>,

    /// Sort descriptors by path instead of directory-listing order
    #[arg(long = "sort")]
    pub sort: bool,

    /// Also scan subdirectories
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Stop at the first descriptor that cannot be read
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Descriptor file extension
    #[arg(long = "extension", value_name = "EXT", default_value = DESCRIPTOR_EXTENSION)]
    pub extension: String,

    /// Show a progress bar while parsing
    #[arg(long = "progress")]
    pub progress: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if self.headings.len() > self.directories.len() {
            return Err(CtlError::configuration(format!(
                "{} headings given for {} directories",
                self.headings.len(),
                self.directories.len()
            )));
        }
        Ok(())
    }

    /// Build the summarizer configuration
    pub fn summary_config(&self) -> SummaryConfig {
        SummaryConfig::default()
            .with_extension(self.extension.clone())
            .with_recursive(self.recursive)
            .with_sorted_entries(self.sort)
            .with_fail_fast(self.fail_fast)
            .with_progress(self.progress && !self.quiet)
    }

    /// Heading for the directory at `index`
    pub fn heading_for(&self, index: usize, directory: &Path) -> String {
        self.headings
            .get(index)
            .cloned()
            .unwrap_or_else(|| directory.display().to_string())
    }
}
