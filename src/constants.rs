//! Application constants for the descriptor summarizer
//!
//! Directive keywords, file conventions and report layout shared by the
//! parser, the summarizer and the renderer.

// =============================================================================
// Descriptor Directives
// =============================================================================

/// Directive keywords, matched case-insensitively against the first token
pub mod directives {
    pub const TITLE: &str = "title";
    pub const XDEF: &str = "xdef";
    pub const YDEF: &str = "ydef";
    pub const ZDEF: &str = "zdef";
    pub const TDEF: &str = "tdef";
    pub const VARS: &str = "vars";
    pub const ENDVARS: &str = "endvars";
    pub const DSET: &str = "dset";
}

/// Marker prefix for data files relative to the descriptor's directory
pub const DSET_RELATIVE_PREFIX: char = '^';

/// Data file value used when a `dset` line names no file
pub const UNKNOWN_DATA_FILE: &str = "Unknown";

/// Leading character of comment lines
pub const COMMENT_PREFIX: char = '#';

/// Minimum tokens on a variable line: name, levels, units code, description
pub const MIN_VARIABLE_TOKENS: usize = 4;

/// Index of the first description token on a variable line
pub const VARIABLE_DESCRIPTION_START: usize = 3;

// =============================================================================
// Files and Reports
// =============================================================================

/// Descriptor file extension (without the dot)
pub const DESCRIPTOR_EXTENSION: &str = "ctl";

/// Fixed header row of every summary table
pub const REPORT_HEADERS: [&str; 9] = [
    "File",
    "Title",
    "XDEF",
    "YDEF",
    "ZDEF",
    "TDEF",
    "VAR Count",
    "Variables",
    "Data File",
];

/// Columns rendered right-aligned in text tables
pub const NUMERIC_COLUMNS: [usize; 5] = [2, 3, 4, 5, 6];

/// Heading of the skipped-file list that follows a table in text reports
pub const SKIPPED_FILES_HEADING: &str = "Skipped files:";

/// Separator between rendered variables in the `Variables` column
pub const VARIABLE_SEPARATOR: &str = ", ";
