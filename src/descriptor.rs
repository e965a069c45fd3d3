//! GrADS data descriptor (`.ctl`) parsing.
//!
//! Scans descriptor lines once, in file order, and extracts the title, the
//! declared axis lengths, the variable list and the referenced data file.
//! The parser is lenient about content: malformed directive or variable
//! lines are skipped and leave the record untouched. Only file access
//! problems are reported as errors.

use crate::constants::{
    COMMENT_PREFIX, DESCRIPTOR_EXTENSION, DSET_RELATIVE_PREFIX, MIN_VARIABLE_TOKENS,
    UNKNOWN_DATA_FILE, VARIABLE_DESCRIPTION_START, directives,
};
use crate::error::{CtlError, Result};
use crate::models::{CtlMetadata, ParseStats, Variable};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Parse descriptor lines into a metadata record
pub fn parse_descriptor_lines<I, S>(lines: I) -> CtlMetadata
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_descriptor_lines_with_stats(lines).0
}

/// Parse descriptor lines, also returning line-level statistics
pub fn parse_descriptor_lines_with_stats<I, S>(lines: I) -> (CtlMetadata, ParseStats)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fold_lines(PathBuf::new(), lines)
}

/// Parse the full text of a descriptor
pub fn parse_descriptor_str(text: &str) -> CtlMetadata {
    parse_descriptor_lines(text.lines())
}

/// Read and parse a descriptor file
///
/// The path must name an existing file with a `.ctl` extension (any case).
pub fn parse_descriptor_file(path: impl AsRef<Path>) -> Result<CtlMetadata> {
    parse_descriptor_file_with_stats(path).map(|(metadata, _)| metadata)
}

/// Read and parse a descriptor file, also returning line-level statistics
pub fn parse_descriptor_file_with_stats(
    path: impl AsRef<Path>,
) -> Result<(CtlMetadata, ParseStats)> {
    read_descriptor(path.as_ref(), DESCRIPTOR_EXTENSION)
}

/// Read and parse a descriptor, checking against a caller-chosen extension
pub(crate) fn read_descriptor(path: &Path, extension: &str) -> Result<(CtlMetadata, ParseStats)> {
    let path = validate_descriptor_path(path, extension)?;

    // Whole file is read and the handle released before parsing begins
    let bytes = fs::read(&path).map_err(|e| CtlError::io(&path, e))?;
    let text = String::from_utf8_lossy(&bytes);

    let (metadata, stats) = fold_lines(path, text.lines());

    debug!(
        "Parsed descriptor {}: {} lines, {} variables, {} skipped",
        metadata.source_path().display(),
        stats.total_lines,
        stats.variables_parsed,
        stats.lines_skipped
    );

    Ok((metadata, stats))
}

/// Check that a path is non-empty, exists and carries the descriptor extension
fn validate_descriptor_path(path: &Path, extension: &str) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CtlError::EmptyPath);
    }

    let path = if trimmed.len() == raw.len() {
        path.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    };

    if !path.exists() {
        return Err(CtlError::FileNotFound { path });
    }

    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
    if !has_extension {
        return Err(CtlError::NotADescriptor {
            path,
            expected: extension.to_string(),
        });
    }

    Ok(path)
}

fn fold_lines<I, S>(source_path: PathBuf, lines: I) -> (CtlMetadata, ParseStats)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .fold(CtlMetadataBuilder::new(), |builder, line| {
            builder.consume(line.as_ref())
        })
        .build(source_path)
}

/// Accumulates descriptor state while lines are scanned
#[derive(Debug, Default)]
struct CtlMetadataBuilder {
    title: String,
    x_def: usize,
    y_def: usize,
    z_def: usize,
    t_def: usize,
    variables: Vec<Variable>,
    data_file: String,
    in_variable_block: bool,
    stats: ParseStats,
}

impl CtlMetadataBuilder {
    fn new() -> Self {
        Self::default()
    }

    fn consume(mut self, line: &str) -> Self {
        self.parse_line(line);
        self
    }

    fn parse_line(&mut self, raw: &str) {
        self.stats.total_lines += 1;

        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return;
        }

        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return;
        };

        // Directives win over the variable fallback, even inside an unclosed block
        match keyword.to_ascii_lowercase().as_str() {
            directives::TITLE => self.parse_title(line),
            directives::XDEF => {
                if let Some(n) = self.axis_length(line, tokens.next()) {
                    self.x_def = n;
                }
            }
            directives::YDEF => {
                if let Some(n) = self.axis_length(line, tokens.next()) {
                    self.y_def = n;
                }
            }
            directives::ZDEF => {
                if let Some(n) = self.axis_length(line, tokens.next()) {
                    self.z_def = n;
                }
            }
            directives::TDEF => {
                if let Some(n) = self.axis_length(line, tokens.next()) {
                    self.t_def = n;
                }
            }
            directives::VARS => {
                self.in_variable_block = true;
                self.stats.directives_applied += 1;
            }
            directives::ENDVARS => {
                self.in_variable_block = false;
                self.stats.directives_applied += 1;
            }
            directives::DSET => self.parse_dset(tokens.next()),
            _ if self.in_variable_block => self.parse_variable(line),
            _ => {}
        }
    }

    fn parse_title(&mut self, line: &str) {
        match line.split_once(char::is_whitespace) {
            Some((_, rest)) => {
                self.title = rest.trim_start().to_string();
                self.stats.directives_applied += 1;
            }
            None => self.skip(line, "title has no text"),
        }
    }

    /// Parse the length token of an axis definition
    fn axis_length(&mut self, line: &str, token: Option<&str>) -> Option<usize> {
        match token.map(str::parse::<usize>) {
            Some(Ok(n)) => {
                self.stats.directives_applied += 1;
                Some(n)
            }
            Some(Err(_)) => {
                self.skip(line, "axis length is not a non-negative integer");
                None
            }
            None => {
                self.skip(line, "axis length is missing");
                None
            }
        }
    }

    fn parse_dset(&mut self, token: Option<&str>) {
        self.data_file = match token {
            Some(token) => token
                .strip_prefix(DSET_RELATIVE_PREFIX)
                .unwrap_or(token)
                .trim()
                .to_string(),
            None => UNKNOWN_DATA_FILE.to_string(),
        };
        self.stats.directives_applied += 1;
    }

    fn parse_variable(&mut self, line: &str) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < MIN_VARIABLE_TOKENS {
            self.skip(line, "variable line has fewer than 4 fields");
            return;
        }

        let description = parts[VARIABLE_DESCRIPTION_START..].join(" ");
        self.variables.push(Variable::new(parts[0], description));
        self.stats.variables_parsed += 1;
    }

    fn skip(&mut self, line: &str, reason: &str) {
        self.stats.lines_skipped += 1;
        trace!("Skipping line {} ({}): {}", self.stats.total_lines, reason, line);
    }

    fn build(self, source_path: PathBuf) -> (CtlMetadata, ParseStats) {
        let metadata = CtlMetadata::new(
            source_path,
            self.title,
            self.x_def,
            self.y_def,
            self.z_def,
            self.t_def,
            self.variables,
            self.data_file,
        );
        (metadata, self.stats)
    }
}
