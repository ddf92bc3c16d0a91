//! Utilities module - discovery and metadata of utility files
//!
//! This module provides functionality for:
//! - Parsing `// @key value` header directives from utility files
//! - Loading utilities from one or more folders into a sorted catalog
//!
//! # Module Structure
//!
//! - `types` - Core data types (UtilityRecord, LoadReport, etc.)
//! - `metadata` - Header directive extraction from a single file
//! - `loader` - Catalog loading from the file system

mod loader;
mod metadata;
mod types;

pub use types::{Catalog, Directive, LoadOptions, LoadReport, SkippedFile, UtilityRecord};

pub use metadata::{extract_metadata, parse_directive, split_tags};

pub use loader::{load_catalog, sort_by_title};

#[cfg(test)]
pub(crate) use loader::{entry_path, read_utilities_from_dir};

#[cfg(test)]
#[path = "../utilities_tests.rs"]
mod tests;
