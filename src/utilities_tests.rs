use super::*;
use crate::error::UtilHubError;
use std::fs;
use std::path::{Path, PathBuf};

/// Helper to write a utility file with the given body
fn write_utility(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

fn titles(catalog: &Catalog) -> Vec<&str> {
    catalog.iter().map(|r| r.title()).collect()
}

// ============================================
// DIRECTIVE PARSING TESTS
// ============================================

#[test]
fn test_parse_directive_basic_keys() {
    assert_eq!(
        parse_directive("// @id backup-db"),
        Some(Directive::Id("backup-db".to_string()))
    );
    assert_eq!(
        parse_directive("// @title Backup Database"),
        Some(Directive::Title("Backup Database".to_string()))
    );
    assert_eq!(
        parse_directive("// @desc Dumps the db"),
        Some(Directive::Description("Dumps the db".to_string()))
    );
    assert_eq!(
        parse_directive("// @tags db, backup"),
        Some(Directive::Tags(vec!["db".to_string(), "backup".to_string()]))
    );
}

#[test]
fn test_parse_directive_trims_line_and_value() {
    assert_eq!(
        parse_directive("   // @title   Spaced Out   "),
        Some(Directive::Title("Spaced Out".to_string()))
    );
}

#[test]
fn test_parse_directive_requires_exact_spacing() {
    // No space after the slashes
    assert_eq!(parse_directive("//@id x"), None);
    // Two spaces after the slashes
    assert_eq!(parse_directive("//  @id x"), None);
    // No space after the key
    assert_eq!(parse_directive("// @id:x"), None);
    // Tab instead of space after the key
    assert_eq!(parse_directive("// @id\tx"), None);
}

#[test]
fn test_parse_directive_key_must_match_exactly() {
    assert_eq!(parse_directive("// @idx something"), None);
    assert_eq!(parse_directive("// @description long"), None);
    assert_eq!(parse_directive("// @author someone"), None);
}

#[test]
fn test_parse_directive_without_value_is_ignored() {
    // Trimming removes the trailing space, so the prefix no longer matches
    assert_eq!(parse_directive("// @title   "), None);
    assert_eq!(parse_directive("// @id"), None);
}

#[test]
fn test_parse_directive_ignores_code_and_plain_comments() {
    assert_eq!(parse_directive("Console.WriteLine(\"// @id nope\");"), None);
    assert_eq!(parse_directive("// just a comment"), None);
    assert_eq!(parse_directive(""), None);
}

#[test]
fn test_split_tags_drops_empties_and_duplicates() {
    assert_eq!(split_tags("a, b, b,  c"), vec!["a", "b", "c"]);
    assert_eq!(split_tags(" , ,x,, "), vec!["x"]);
    assert!(split_tags(",,,").is_empty());
}

#[test]
fn test_split_tags_keeps_declared_order() {
    assert_eq!(split_tags("zeta, alpha, mid"), vec!["zeta", "alpha", "mid"]);
}

// ============================================
// EXTRACTION TESTS
// ============================================

#[test]
fn test_extract_full_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_utility(
        dir.path(),
        "thing.csx",
        "// @id X\n// @title Y\n// @desc Z\n// @tags a, b, b,  c\nConsole.WriteLine(1);\n",
    );

    let record = extract_metadata(&path, 60).unwrap();
    assert_eq!(record.id(), "X");
    assert_eq!(record.title(), "Y");
    assert_eq!(record.description(), "Z");
    assert_eq!(record.tags(), ["a", "b", "c"]);
    assert_eq!(record.file_path(), path.as_path());
}

#[test]
fn test_extract_crlf_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_utility(
        dir.path(),
        "win.csx",
        "// @id win-tool\r\n// @title Windows Tool\r\n// @tags a, b\r\nConsole.WriteLine(1);\r\n",
    );

    let record = extract_metadata(&path, 60).unwrap();
    assert_eq!(record.id(), "win-tool");
    assert_eq!(record.title(), "Windows Tool");
    assert_eq!(record.tags(), ["a", "b"]);
}

#[test]
fn test_extract_header_after_byte_order_mark() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bom.csx");
    fs::write(&path, b"\xEF\xBB\xBF// @title Bom Title\r\n// @desc second\r\n").unwrap();

    let record = extract_metadata(&path, 60).unwrap();
    assert_eq!(record.title(), "Bom Title");
    assert_eq!(record.description(), "second");
    assert_eq!(record.id(), "bom");
}

#[test]
fn test_extract_byte_order_mark_only_counts_on_first_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("late.csx");
    fs::write(&path, b"// @desc first\n\xEF\xBB\xBF// @title Late\n").unwrap();

    let record = extract_metadata(&path, 60).unwrap();
    assert_eq!(record.description(), "first");
    assert_eq!(record.title(), "late");
}

#[test]
fn test_extract_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_utility(
        dir.path(),
        "same.csx",
        "// @title Same\n// @tags one, two\n",
    );

    let first = extract_metadata(&path, 60).unwrap();
    let second = extract_metadata(&path, 60).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_extract_defaults_to_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_utility(dir.path(), "clean-temp.csx", "Console.WriteLine(\"hi\");\n");

    let record = extract_metadata(&path, 60).unwrap();
    assert_eq!(record.id(), "clean-temp");
    assert_eq!(record.title(), "clean-temp");
    assert_eq!(record.description(), "");
    assert!(record.tags().is_empty());
    assert_eq!(record.file_name(), "clean-temp.csx");
}

#[test]
fn test_extract_last_duplicate_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_utility(
        dir.path(),
        "dup.csx",
        "// @title First\n// @tags a\n// @title Second\n// @tags b, c\n",
    );

    let record = extract_metadata(&path, 60).unwrap();
    assert_eq!(record.title(), "Second");
    assert_eq!(record.tags(), ["b", "c"]);
}

#[test]
fn test_extract_ignores_directives_after_scan_window() {
    let dir = tempfile::tempdir().unwrap();
    let mut body = String::new();
    for i in 0..60 {
        body.push_str(&format!("var x{} = {};\n", i, i));
    }
    // Line 61
    body.push_str("// @title Too Late\n");
    let path = write_utility(dir.path(), "late.csx", &body);

    let record = extract_metadata(&path, 60).unwrap();
    assert_eq!(record.title(), "late");

    // A larger window picks it up
    let record = extract_metadata(&path, 61).unwrap();
    assert_eq!(record.title(), "Too Late");
}

#[test]
fn test_extract_directive_on_last_scanned_line_counts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_utility(dir.path(), "edge.csx", "\n\n// @desc third line\n");

    assert_eq!(extract_metadata(&path, 3).unwrap().description(), "third line");
    assert_eq!(extract_metadata(&path, 2).unwrap().description(), "");
}

#[test]
fn test_extract_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = extract_metadata(&dir.path().join("gone.csx"), 60).unwrap_err();
    assert!(matches!(err, UtilHubError::MetadataRead { .. }));
}

#[test]
fn test_extract_decodes_invalid_utf8_lossily() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cafe.csx");
    fs::write(&path, b"// @title Caf\xe9 Report\n// @desc \xff\xfe\n// @tags x\n").unwrap();

    let record = extract_metadata(&path, 60).unwrap();
    assert_eq!(record.title(), "Caf\u{fffd} Report");
    assert_eq!(record.description(), "\u{fffd}\u{fffd}");
    assert_eq!(record.tags(), ["x"]);
}

// ============================================
// LOADER TESTS
// ============================================

#[test]
fn test_load_catalog_sorts_by_title_ignoring_case() {
    let dir = tempfile::tempdir().unwrap();
    write_utility(dir.path(), "a.csx", "// @title zebra\n");
    write_utility(dir.path(), "b.csx", "// @title Apple\n");
    write_utility(dir.path(), "c.csx", "// @title mango\n");

    let report = load_catalog(&[dir.path().to_path_buf()], &LoadOptions::default());
    assert_eq!(titles(&report.catalog), vec!["Apple", "mango", "zebra"]);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_sort_folds_to_upper_case() {
    let dir = tempfile::tempdir().unwrap();
    write_utility(dir.path(), "a.csx", "// @title _tool\n");
    write_utility(dir.path(), "b.csx", "// @title apple\n");
    write_utility(dir.path(), "c.csx", "// @title Zed\n");
    write_utility(dir.path(), "d.csx", "// @title [draft]\n");

    let report = load_catalog(&[dir.path().to_path_buf()], &LoadOptions::default());
    // '[' and '_' sit between 'Z' and 'a', so upper-case folding puts them last
    assert_eq!(
        titles(&report.catalog),
        vec!["apple", "Zed", "[draft]", "_tool"]
    );
}

#[test]
fn test_load_catalog_only_matching_files_non_recursive() {
    let dir = tempfile::tempdir().unwrap();
    write_utility(dir.path(), "keep.csx", "");
    write_utility(dir.path(), "notes.txt", "// @title Nope\n");
    write_utility(dir.path(), "old.cs", "");
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    write_utility(&nested, "deep.csx", "");

    let report = load_catalog(&[dir.path().to_path_buf()], &LoadOptions::default());
    assert_eq!(titles(&report.catalog), vec!["keep"]);
}

#[test]
fn test_load_catalog_same_name_in_two_folders_appears_twice() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let path_a = write_utility(a.path(), "x.csx", "// @desc from a\n");
    let path_b = write_utility(b.path(), "x.csx", "// @desc from b\n");

    let report = load_catalog(
        &[a.path().to_path_buf(), b.path().to_path_buf()],
        &LoadOptions::default(),
    );
    assert_eq!(report.catalog.len(), 2);
    assert!(report.catalog.iter().all(|r| r.file_name() == "x.csx"));

    let paths: Vec<&Path> = report.catalog.iter().map(|r| r.file_path()).collect();
    assert!(paths.contains(&path_a.as_path()));
    assert!(paths.contains(&path_b.as_path()));

    // Equal titles keep folder order
    assert_eq!(report.catalog[0].description(), "from a");
    assert_eq!(report.catalog[1].description(), "from b");
}

#[test]
fn test_load_catalog_missing_and_blank_folders_contribute_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_utility(dir.path(), "only.csx", "");

    let report = load_catalog(
        &[
            PathBuf::new(),
            dir.path().join("does-not-exist"),
            dir.path().to_path_buf(),
        ],
        &LoadOptions::default(),
    );
    assert_eq!(titles(&report.catalog), vec!["only"]);
}

#[test]
fn test_load_catalog_empty_folder_is_empty_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let report = load_catalog(&[dir.path().to_path_buf()], &LoadOptions::default());
    assert!(report.is_empty());
    assert!(report.skipped.is_empty());
}

#[test]
fn test_load_catalog_keeps_badly_encoded_file() {
    let dir = tempfile::tempdir().unwrap();
    write_utility(dir.path(), "ok.csx", "// @title Ok\n");
    fs::write(dir.path().join("cafe.csx"), b"// @title Caf\xe9 Report\n").unwrap();

    let report = load_catalog(&[dir.path().to_path_buf()], &LoadOptions::default());
    assert_eq!(report.catalog.len(), 2);
    assert_eq!(titles(&report.catalog), vec!["Caf\u{fffd} Report", "Ok"]);
    assert!(report.skipped.is_empty());
}

// /proc/self/mem opens as a regular file but fails on the first read
#[cfg(target_os = "linux")]
#[test]
fn test_load_catalog_skips_unreadable_file() {
    let mem = Path::new("/proc/self/mem");
    if !mem.is_file() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    write_utility(dir.path(), "good.csx", "// @title Good\n");
    let bad = dir.path().join("bad.csx");
    std::os::unix::fs::symlink(mem, &bad).unwrap();

    let report = load_catalog(&[dir.path().to_path_buf()], &LoadOptions::default());
    assert_eq!(titles(&report.catalog), vec!["Good"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].path, bad);
    assert!(matches!(
        report.skipped[0].error,
        UtilHubError::MetadataRead { .. }
    ));
}

#[test]
fn test_unreadable_folder_entry_is_left_out() {
    let entry = Err(std::io::Error::other("stale handle"));
    assert_eq!(entry_path(Path::new("/tmp/utilities"), entry), None);
}

#[test]
fn test_load_catalog_respects_custom_pattern_and_window() {
    let dir = tempfile::tempdir().unwrap();
    write_utility(dir.path(), "tool.cs", "\n// @title Custom\n");

    let options = LoadOptions {
        file_pattern: "*.cs".to_string(),
        max_lines: 1,
    };
    let report = load_catalog(&[dir.path().to_path_buf()], &options);
    assert_eq!(titles(&report.catalog), vec!["tool"]);
}

#[test]
fn test_load_catalog_produces_fresh_records_each_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_utility(dir.path(), "r.csx", "// @title Before\n");
    let dirs = [dir.path().to_path_buf()];

    let first = load_catalog(&dirs, &LoadOptions::default());
    fs::write(&path, "// @title After\n").unwrap();
    let second = load_catalog(&dirs, &LoadOptions::default());

    assert_eq!(titles(&first.catalog), vec!["Before"]);
    assert_eq!(titles(&second.catalog), vec!["After"]);
}

#[test]
fn test_read_utilities_from_dir_orders_by_file_name() {
    let dir = tempfile::tempdir().unwrap();
    write_utility(dir.path(), "b.csx", "");
    write_utility(dir.path(), "a.csx", "");
    write_utility(dir.path(), "c.csx", "");

    let pattern = glob::Pattern::new("*.csx").unwrap();
    let mut report = LoadReport::default();
    read_utilities_from_dir(dir.path(), &pattern, 60, &mut report);

    let names: Vec<String> = report.catalog.iter().map(|r| r.file_name()).collect();
    assert_eq!(names, vec!["a.csx", "b.csx", "c.csx"]);
}

#[test]
fn test_sort_by_title_is_case_insensitive() {
    let mut catalog = vec![
        UtilityRecord::from_path("/u/b.csx"),
        UtilityRecord::from_path("/u/A.csx"),
        UtilityRecord::from_path("/u/C.csx"),
    ];
    sort_by_title(&mut catalog);
    assert_eq!(titles(&catalog), vec!["A", "b", "C"]);
}
