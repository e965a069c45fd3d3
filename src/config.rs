//! Configuration for directory summarization.
//!
//! Controls which files are treated as descriptors, how directories are
//! walked, and what happens when a descriptor cannot be read.

use crate::constants::DESCRIPTOR_EXTENSION;
use crate::error::{CtlError, Result};
use serde::{Deserialize, Serialize};

/// Settings for a [`crate::summarizer::Summarizer`] run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Descriptor file extension, without the dot (matched case-sensitively)
    pub extension: String,

    /// Walk subdirectories as well as the top-level directory
    pub recursive: bool,

    /// Sort descriptors by path instead of keeping directory-listing order
    pub sort_entries: bool,

    /// Abort on the first unreadable descriptor instead of collecting failures
    pub fail_fast: bool,

    /// Show a progress bar while descriptors are parsed
    pub show_progress: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            extension: DESCRIPTOR_EXTENSION.to_string(),
            recursive: false,
            sort_entries: false,
            fail_fast: false,
            show_progress: false,
        }
    }
}

impl SummaryConfig {
    /// Use a different descriptor extension; a leading dot is ignored
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension
            .strip_prefix('.')
            .unwrap_or(&extension)
            .to_string();
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Enable lexicographic ordering of report rows
    pub fn with_sorted_entries(mut self, sort_entries: bool) -> Self {
        self.sort_entries = sort_entries;
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// File-name suffix matched during discovery, e.g. `.ctl`
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }

    pub fn validate(&self) -> Result<()> {
        if self.extension.trim().is_empty() {
            return Err(CtlError::configuration("descriptor extension cannot be empty"));
        }
        if self.extension.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\') {
            return Err(CtlError::configuration(format!(
                "invalid descriptor extension: {:?}",
                self.extension
            )));
        }
        // Descriptor paths are checked against their last extension only
        if self.extension.contains('.') {
            return Err(CtlError::configuration(format!(
                "descriptor extension must be a single component without dots: {:?}",
                self.extension
            )));
        }
        Ok(())
    }
}
