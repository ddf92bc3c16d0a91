//! Header directive extraction
//!
//! Utility files describe themselves with comment lines at the top:
//!
//! ```text
//! // @id backup-db
//! // @title Backup Database
//! // @desc Dumps the production database to ./backups
//! // @tags db, backup
//! ```
//!
//! Only the first `max_lines` lines are scanned. A line counts when, after
//! trimming, it starts with `// @<key> ` (one space after `//`, one after the
//! key). Later directives of the same key replace earlier ones.
//!
//! Bytes that are not UTF-8 decode to U+FFFD instead of failing the file.
//! A leading byte-order mark is dropped and `\r\n` line endings are accepted.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, instrument};

use crate::error::UtilHubError;

use super::types::{Directive, UtilityRecord};

/// Every directive line starts with this after trimming
const DIRECTIVE_MARKER: &str = "// @";

/// UTF-8 encoding of U+FEFF
const BYTE_ORDER_MARK: &[u8] = b"\xEF\xBB\xBF";

/// Read a utility file's header and build its record.
///
/// Open and read failures are returned to the caller, never replaced with a
/// default record. Bad encoding is not a failure.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn extract_metadata(path: &Path, max_lines: usize) -> Result<UtilityRecord, UtilHubError> {
    let read_err = |source| UtilHubError::MetadataRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let mut record = UtilityRecord::from_path(path);
    let mut found = 0usize;

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();

    for index in 0..max_lines {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(read_err)? == 0 {
            break;
        }
        let line = decode_line(&buf, index == 0);
        if let Some(directive) = parse_directive(&line) {
            found += 1;
            record = record.apply(directive);
        }
    }

    debug!(directives = found, id = record.id(), "Extracted utility metadata");
    Ok(record)
}

/// Decode one raw line without its terminator. Only the first line may
/// carry a byte-order mark.
fn decode_line(raw: &[u8], first: bool) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let raw = if first {
        raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw)
    } else {
        raw
    };
    String::from_utf8_lossy(raw).into_owned()
}

/// Parse one line into a directive, or None if it is not a recognized one.
pub fn parse_directive(line: &str) -> Option<Directive> {
    let line = line.trim();
    if !line.starts_with(DIRECTIVE_MARKER) {
        return None;
    }

    if let Some(v) = directive_value(line, "@id") {
        Some(Directive::Id(v.to_string()))
    } else if let Some(v) = directive_value(line, "@title") {
        Some(Directive::Title(v.to_string()))
    } else if let Some(v) = directive_value(line, "@desc") {
        Some(Directive::Description(v.to_string()))
    } else {
        directive_value(line, "@tags").map(|v| Directive::Tags(split_tags(v)))
    }
}

/// Value of `// <key> <value>`, trimmed. `// @idx foo` does not match `@id`.
fn directive_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.strip_prefix("// ")?
        .strip_prefix(key)?
        .strip_prefix(' ')
        .map(str::trim)
}

/// Split a `@tags` value on commas: trimmed, no empties, first occurrence kept.
pub fn split_tags(value: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}
