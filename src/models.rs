//! Core data structures for descriptor summaries.
//!
//! Defines the metadata record produced for each descriptor file, the
//! table row it is flattened into, and the per-directory report that
//! collects rows and failures.

use crate::constants::{REPORT_HEADERS, VARIABLE_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One declared variable from a `vars` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub description: String,
}

impl Variable {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Render as `name (description)`
    pub fn render(&self) -> String {
        format!("{} ({})", self.name, self.description)
    }
}

/// Metadata extracted from a single descriptor file
///
/// Built by the descriptor parser and read-only afterwards. Variable names
/// and descriptions are stored as pairs, so both sequences always have the
/// same length as [`CtlMetadata::variable_count`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtlMetadata {
    file_name: String,
    source_path: PathBuf,
    title: String,
    x_def: usize,
    y_def: usize,
    z_def: usize,
    t_def: usize,
    variables: Vec<Variable>,
    data_file: String,
}

impl CtlMetadata {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        source_path: PathBuf,
        title: String,
        x_def: usize,
        y_def: usize,
        z_def: usize,
        t_def: usize,
        variables: Vec<Variable>,
        data_file: String,
    ) -> Self {
        let file_name = source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file_name,
            source_path,
            title,
            x_def,
            y_def,
            z_def,
            t_def,
            variables,
            data_file,
        }
    }

    /// Basename of the descriptor file
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Declared longitude count
    pub fn x_def(&self) -> usize {
        self.x_def
    }

    /// Declared latitude count
    pub fn y_def(&self) -> usize {
        self.y_def
    }

    /// Declared vertical level count
    pub fn z_def(&self) -> usize {
        self.z_def
    }

    /// Declared time step count
    pub fn t_def(&self) -> usize {
        self.t_def
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Variable names in declaration order
    pub fn variables(&self) -> Vec<&str> {
        self.variables.iter().map(|v| v.name.as_str()).collect()
    }

    /// Variable descriptions, index-aligned with [`CtlMetadata::variables`]
    pub fn variable_descriptions(&self) -> Vec<&str> {
        self.variables
            .iter()
            .map(|v| v.description.as_str())
            .collect()
    }

    /// Referenced data file, `"Unknown"` for a bare `dset` line
    pub fn data_file(&self) -> &str {
        &self.data_file
    }

    /// Comma-joined `name (description)` list used in reports
    pub fn rendered_variables(&self) -> String {
        self.variables
            .iter()
            .map(Variable::render)
            .collect::<Vec<_>>()
            .join(VARIABLE_SEPARATOR)
    }
}

/// One row of the summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub file_name: String,
    pub title: String,
    pub x_def: usize,
    pub y_def: usize,
    pub z_def: usize,
    pub t_def: usize,
    pub variable_count: usize,
    pub variables: String,
    pub data_file: String,
}

impl SummaryRow {
    /// Cell values in header order
    pub fn cells(&self) -> [String; 9] {
        [
            self.file_name.clone(),
            self.title.clone(),
            self.x_def.to_string(),
            self.y_def.to_string(),
            self.z_def.to_string(),
            self.t_def.to_string(),
            self.variable_count.to_string(),
            self.variables.clone(),
            self.data_file.clone(),
        ]
    }
}

impl From<&CtlMetadata> for SummaryRow {
    fn from(metadata: &CtlMetadata) -> Self {
        Self {
            file_name: metadata.file_name().to_string(),
            title: metadata.title().to_string(),
            x_def: metadata.x_def(),
            y_def: metadata.y_def(),
            z_def: metadata.z_def(),
            t_def: metadata.t_def(),
            variable_count: metadata.variable_count(),
            variables: metadata.rendered_variables(),
            data_file: metadata.data_file().to_string(),
        }
    }
}

/// A descriptor that could not be summarized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Summary of every descriptor found in one directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub directory: PathBuf,
    pub headers: Vec<String>,
    pub rows: Vec<SummaryRow>,
    pub failures: Vec<FileFailure>,
}

impl SummaryReport {
    /// Create an empty report with the fixed header row
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            headers: REPORT_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Line-level statistics from one parse, for diagnostics only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Lines scanned, including blank and comment lines
    pub total_lines: usize,

    /// Directive lines that changed the record or the block state
    pub directives_applied: usize,

    /// Variable declarations accepted
    pub variables_parsed: usize,

    /// Directive or variable lines skipped because they were malformed
    pub lines_skipped: usize,
}
