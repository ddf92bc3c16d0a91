//! Utility type definitions
//!
//! This module contains the core data types for utility records and the
//! catalog built from them.

use std::path::{Path, PathBuf};

use crate::error::UtilHubError;

/// One discovered utility file and the metadata from its header.
///
/// Fields are private: a record is built once per load and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UtilityRecord {
    id: String,
    title: String,
    description: String,
    tags: Vec<String>,
    file_path: PathBuf,
}

impl UtilityRecord {
    /// Build a record with every field defaulted from the file stem.
    pub fn from_path(file_path: impl Into<PathBuf>) -> Self {
        let file_path = file_path.into();
        let stem = file_stem(&file_path);
        UtilityRecord {
            id: stem.clone(),
            title: stem,
            description: String::new(),
            tags: Vec::new(),
            file_path,
        }
    }

    /// Apply a parsed directive. Empty values are ignored so `id`/`title`
    /// keep their non-empty defaults.
    pub(crate) fn apply(mut self, directive: Directive) -> Self {
        match directive {
            Directive::Id(v) if !v.is_empty() => self.id = v,
            Directive::Title(v) if !v.is_empty() => self.title = v,
            Directive::Description(v) => self.description = v,
            Directive::Tags(tags) => self.tags = tags,
            _ => {}
        }
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// File name with extension, e.g. `backup-db.csx`
    pub fn file_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Base name without extension; falls back to the whole path text so the
/// result is never empty for a real file.
fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// A recognized header directive and its value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    /// `// @id <value>`
    Id(String),
    /// `// @title <value>`
    Title(String),
    /// `// @desc <value>`
    Description(String),
    /// `// @tags a, b, c`
    Tags(Vec<String>),
}

/// The catalog of one load cycle, sorted by title (case-insensitive)
pub type Catalog = Vec<UtilityRecord>;

/// A file left out of the catalog because its header could not be read
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: UtilHubError,
}

/// Result of one load cycle
#[derive(Debug, Default)]
pub struct LoadReport {
    pub catalog: Catalog,
    pub skipped: Vec<SkippedFile>,
}

impl LoadReport {
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

/// Knobs for a load cycle, usually taken from the config
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// File name glob, e.g. `*.csx`
    pub file_pattern: String,
    /// Lines scanned for header directives per file
    pub max_lines: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            file_pattern: crate::config::DEFAULT_FILE_PATTERN.to_string(),
            max_lines: crate::config::DEFAULT_HEADER_LINES_TO_SCAN,
        }
    }
}

impl LoadOptions {
    pub fn from_config(config: &crate::config::Config) -> Self {
        LoadOptions {
            file_pattern: config.get_file_pattern().to_string(),
            max_lines: config.get_header_lines_to_scan(),
        }
    }
}
