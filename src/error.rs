//! Error handling for descriptor parsing and report generation.
//!
//! Only structural failures (missing files, unreadable files, wrong
//! extensions, unwritable reports) are errors. Malformed content lines are
//! tolerated by the parser and never surface here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CtlError {
    #[error("Descriptor path cannot be empty")]
    EmptyPath,

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Expected a .{expected} file, but got: {path}")]
    NotADescriptor { path: PathBuf, expected: String },

    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Directory traversal failed: {0}")]
    DirectoryTraversal(#[from] walkdir::Error),

    #[error("Could not write report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CtlError {
    /// Wrap an I/O failure with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CtlError>;
