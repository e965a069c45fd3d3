//! Descriptor discovery for summary directories
//!
//! Lists the entries of a directory (optionally recursively) and keeps the
//! ones whose name ends with the descriptor suffix. A matching directory is
//! kept as well, so the summarizer reports it as an unreadable descriptor
//! instead of dropping it. Entries are returned in the order the filesystem
//! yields them.

use crate::error::{CtlError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// File discovery component for descriptor directories
#[derive(Debug)]
pub struct DescriptorDiscovery {
    directory: PathBuf,
    suffix: String,
    recursive: bool,
}

impl DescriptorDiscovery {
    /// Create a discovery for `directory`, matching names ending in `suffix`
    pub fn new(directory: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            suffix: suffix.into(),
            recursive: false,
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Discover descriptor files
    ///
    /// Fails only when the directory itself is missing or unreadable.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        if !self.directory.is_dir() {
            return Err(CtlError::DirectoryNotFound {
                path: self.directory.clone(),
            });
        }

        debug!(
            "Searching for *{} files in: {}",
            self.suffix,
            self.directory.display()
        );

        let files = if self.recursive {
            self.discover_recursive()?
        } else {
            self.discover_flat()?
        };

        debug!(
            "Found {} descriptor files in {}",
            files.len(),
            self.directory.display()
        );

        Ok(files)
    }

    fn discover_flat(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let entries = fs::read_dir(&self.directory).map_err(|e| CtlError::io(&self.directory, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| CtlError::io(&self.directory, e))?;
            let path = entry.path();
            if self.matches(&path) {
                files.push(path);
            }
        }

        Ok(files)
    }

    fn discover_recursive(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.directory).min_depth(1) {
            let entry = entry?;
            if self.matches(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// Case-sensitive suffix match on the file name
    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(&self.suffix))
    }
}
