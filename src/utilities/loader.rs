//! Utility loading from file system
//!
//! This module builds the catalog from the primary utilities folder and the
//! optional extra folder given on the command line.

use std::cmp::Ordering;
use std::fs::DirEntry;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

use glob::{MatchOptions, Pattern};

use crate::error::UtilHubError;

use super::metadata::extract_metadata;
use super::types::{Catalog, LoadOptions, LoadReport, SkippedFile, UtilityRecord};

/// Load every matching utility from `dirs` into a catalog sorted by title.
///
/// Missing or blank folders contribute nothing. A file whose header cannot be
/// read is skipped and listed in the report instead of aborting the load.
/// Folders are not de-duplicated: the same file name in two folders yields
/// two records.
#[instrument(level = "debug", skip_all, fields(dirs = dirs.len()))]
pub fn load_catalog(dirs: &[PathBuf], options: &LoadOptions) -> LoadReport {
    let pattern = match Pattern::new(&options.file_pattern) {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, pattern = %options.file_pattern, "Invalid utility file pattern");
            return LoadReport::default();
        }
    };

    let mut report = LoadReport::default();

    for dir in dirs {
        if dir.as_os_str().to_string_lossy().trim().is_empty() || !dir.is_dir() {
            debug!(dir = %dir.display(), "Utilities folder missing or blank, skipping");
            continue;
        }
        read_utilities_from_dir(dir, &pattern, options.max_lines, &mut report);
    }

    sort_by_title(&mut report.catalog);

    debug!(
        count = report.catalog.len(),
        skipped = report.skipped.len(),
        "Loaded utilities from all folders"
    );
    report
}

/// Read utilities from a single folder (non-recursive) and append them to the report.
///
/// Files are visited in file-name order so extraction order is deterministic.
pub(crate) fn read_utilities_from_dir(
    dir: &Path,
    pattern: &Pattern,
    max_lines: usize,
    report: &mut LoadReport,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            let error = UtilHubError::DirectoryRead {
                path: dir.to_path_buf(),
                source,
            };
            warn!(error = %error, "Failed to read utilities folder");
            return;
        }
    };

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry_path(dir, entry))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|name| pattern.matches_with(name, options))
                .unwrap_or(false)
        })
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    for path in files {
        match extract_metadata(&path, max_lines) {
            Ok(record) => report.catalog.push(record),
            Err(error) => {
                warn!(error = %error, "Skipping utility with unreadable header");
                report.skipped.push(SkippedFile { path, error });
            }
        }
    }
}

/// Path of a folder entry. Unreadable entries are logged and left out.
pub(crate) fn entry_path(dir: &Path, entry: std::io::Result<DirEntry>) -> Option<PathBuf> {
    match entry {
        Ok(entry) => Some(entry.path()),
        Err(e) => {
            warn!(error = %e, dir = %dir.display(), "Failed to read folder entry");
            None
        }
    }
}

/// Stable sort by title, ignoring case by folding to upper case; equal
/// titles keep discovery order.
pub fn sort_by_title(catalog: &mut Catalog) {
    catalog.sort_by(compare_titles);
}

fn compare_titles(a: &UtilityRecord, b: &UtilityRecord) -> Ordering {
    let a = a.title().chars().flat_map(char::to_uppercase);
    let b = b.title().chars().flat_map(char::to_uppercase);
    a.cmp(b)
}
