//! Report rendering and output.
//!
//! Renders summary reports as reStructuredText simple tables, GitHub
//! markdown tables or JSON, and writes multi-section report documents.

use crate::constants::{NUMERIC_COLUMNS, SKIPPED_FILES_HEADING};
use crate::error::{CtlError, Result};
use crate::models::{FileFailure, SummaryReport, SummaryRow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Output format for summary tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// reStructuredText simple table
    #[default]
    Rst,
    /// GitHub-flavoured markdown pipe table
    Markdown,
    /// Pretty-printed JSON rows and failures
    Json,
}

/// A titled report section, one per summarized directory
#[derive(Debug, Clone)]
pub struct ReportSection<'a> {
    pub heading: String,
    pub report: &'a SummaryReport,
}

impl<'a> ReportSection<'a> {
    pub fn new(heading: impl Into<String>, report: &'a SummaryReport) -> Self {
        Self {
            heading: heading.into(),
            report,
        }
    }
}

/// Render one report as a table
pub fn render_table(report: &SummaryReport, format: TableFormat) -> Result<String> {
    match format {
        TableFormat::Rst => Ok(render_rst(&report.headers, &table_cells(report))),
        TableFormat::Markdown => Ok(render_markdown(&report.headers, &table_cells(report))),
        TableFormat::Json => Ok(serde_json::to_string_pretty(&report.rows)?),
    }
}

/// Render several sections into one document
///
/// Text formats emit `# heading`, a blank line and the table for each
/// section, followed by a list of skipped files when any descriptor could
/// not be read. JSON emits an object keyed by heading, each holding `rows`
/// and `failures`.
pub fn render_document(sections: &[ReportSection<'_>], format: TableFormat) -> Result<String> {
    if format == TableFormat::Json {
        let document: serde_json::Map<String, serde_json::Value> = sections
            .iter()
            .map(|section| {
                serde_json::to_value(JsonSection {
                    rows: &section.report.rows,
                    failures: &section.report.failures,
                })
                .map(|value| (section.heading.clone(), value))
            })
            .collect::<std::result::Result<_, _>>()?;
        return Ok(serde_json::to_string_pretty(&document)?);
    }

    let mut parts = Vec::with_capacity(sections.len());
    for section in sections {
        let table = render_table(section.report, format)?;
        let mut part = format!("# {}\n\n{}", section.heading, table);
        if section.report.has_failures() {
            part.push_str("\n\n");
            part.push_str(&render_failures(&section.report.failures));
        }
        parts.push(part);
    }
    Ok(parts.join("\n\n"))
}

#[derive(Serialize)]
struct JsonSection<'a> {
    rows: &'a [SummaryRow],
    failures: &'a [FileFailure],
}

fn render_failures(failures: &[FileFailure]) -> String {
    let mut lines = vec![SKIPPED_FILES_HEADING.to_string(), String::new()];
    lines.extend(
        failures
            .iter()
            .map(|failure| format!("- {}: {}", failure.path.display(), failure.reason)),
    );
    lines.join("\n")
}

/// Write a rendered report, creating parent directories as needed
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CtlError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, contents).map_err(|source| CtlError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote report ({} bytes) to {}", contents.len(), path.display());
    Ok(())
}

fn table_cells(report: &SummaryReport) -> Vec<Vec<String>> {
    report.rows.iter().map(|row| row.cells().to_vec()).collect()
}

/// Column widths in characters, covering headers and every cell
fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }
    widths
}

fn pad(cell: &str, width: usize, column: usize) -> String {
    if NUMERIC_COLUMNS.contains(&column) {
        format!("{:>width$}", cell, width = width)
    } else {
        format!("{:<width$}", cell, width = width)
    }
}

fn format_line(cells: &[String], widths: &[usize], separator: &str) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| pad(cell, width, i))
        .collect::<Vec<_>>()
        .join(separator)
}

fn render_rst(headers: &[String], rows: &[Vec<String>]) -> String {
    let widths = column_widths(headers, rows);
    let rule = widths
        .iter()
        .map(|&w| "=".repeat(w))
        .collect::<Vec<_>>()
        .join("  ");

    let line = |cells: &[String]| format_line(cells, &widths, "  ").trim_end().to_string();

    let mut lines = vec![rule.clone(), line(headers), rule.clone()];
    lines.extend(rows.iter().map(|row| line(row.as_slice())));
    lines.push(rule);
    lines.join("\n")
}

fn render_markdown(headers: &[String], rows: &[Vec<String>]) -> String {
    let escape = |cell: &String| cell.replace('|', "\\|");
    let headers: Vec<String> = headers.iter().map(escape).collect();
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(escape).collect())
        .collect();
    let widths = column_widths(&headers, &rows);

    let rule = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            if NUMERIC_COLUMNS.contains(&i) {
                format!("{}:", "-".repeat(w + 1))
            } else {
                "-".repeat(w + 2)
            }
        })
        .collect::<Vec<_>>()
        .join("|");

    let row_line = |cells: &[String]| format!("| {} |", format_line(cells, &widths, " | "));

    let mut lines = vec![row_line(headers.as_slice()), format!("|{}|", rule)];
    lines.extend(rows.iter().map(|row| row_line(row.as_slice())));
    lines.join("\n")
}
