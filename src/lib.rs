//! GrADS descriptor summary library
//!
//! Parses GrADS data descriptor (`.ctl`) files and summarizes their grid
//! and variable metadata across directories.
//!
//! This library provides tools for:
//! - Parsing descriptor files into immutable [`CtlMetadata`] records
//! - Discovering descriptors in a directory, optionally recursively
//! - Building per-directory summary tables with failed files reported
//! - Rendering reports as reStructuredText, markdown or JSON
//!
//! ```rust
//! use ctl_summary::parse_descriptor_lines;
//!
//! let metadata = parse_descriptor_lines([
//!     "dset ^output.bin",
//!     "xdef 144 linear 0 2.5",
//!     "vars 1",
//!     "TS 0 99 Surface Temperature",
//!     "endvars",
//! ]);
//!
//! assert_eq!(metadata.data_file(), "output.bin");
//! assert_eq!(metadata.x_def(), 144);
//! assert_eq!(metadata.variables(), vec!["TS"]);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod descriptor;
pub mod error;
pub mod models;
pub mod report;
pub mod summarizer;

// Re-export commonly used types
pub use config::SummaryConfig;
pub use descriptor::{
    parse_descriptor_file, parse_descriptor_file_with_stats, parse_descriptor_lines,
    parse_descriptor_lines_with_stats, parse_descriptor_str,
};
pub use error::{CtlError, Result};
pub use models::{CtlMetadata, FileFailure, ParseStats, SummaryReport, SummaryRow, Variable};
pub use report::{ReportSection, TableFormat, render_document, render_table, write_report};
pub use summarizer::Summarizer;
