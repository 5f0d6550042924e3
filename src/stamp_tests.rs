use super::*;
use crate::core::errors::SrcmaintError;
use proptest::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_stamp_line() {
    assert_eq!(stamp_line(Path::new("UI/Button.h")), "// File: UI/Button.h\n");
}

#[test]
fn stamp_prepends_to_unstamped_content() {
    let stamped = stamp_content("#pragma once\nclass A {};\n", Path::new("a.h"));
    assert_eq!(stamped, "// File: a.h\n#pragma once\nclass A {};\n");
}

#[test]
fn stamp_replaces_existing_marker_line() {
    let stamped = stamp_content("// File: old/path.h\n#pragma once\n", Path::new("a.h"));
    assert_eq!(stamped, "// File: a.h\n#pragma once\n");
}

#[test]
fn stamp_of_empty_content_is_just_the_stamp() {
    assert_eq!(stamp_content("", Path::new("empty.cpp")), "// File: empty.cpp\n");
}

#[test]
fn stamp_of_single_marker_line_without_newline() {
    assert_eq!(
        stamp_content("// File: stale.cpp", Path::new("fresh.cpp")),
        "// File: fresh.cpp\n"
    );
}

#[test]
fn stamp_only_inspects_first_line() {
    let content = "#include <vector>\n// File: misplaced.h\n";
    assert_eq!(
        stamp_content(content, Path::new("x.h")),
        "// File: x.h\n#include <vector>\n// File: misplaced.h\n"
    );
}

#[test]
fn stamp_requires_exact_marker_prefix() {
    // Missing space before the colon is not the marker.
    let content = "// File : x.h\nint a;\n";
    assert_eq!(
        stamp_content(content, Path::new("x.h")),
        "// File: x.h\n// File : x.h\nint a;\n"
    );
}

#[test]
fn stamp_preserves_crlf_in_remaining_lines() {
    let content = "// File: a.cpp\r\nint a;\r\n";
    assert_eq!(stamp_content(content, Path::new("a.cpp")), "// File: a.cpp\nint a;\r\n");
}

proptest! {
    #[test]
    fn stamping_is_idempotent(content in "(// File: [a-z/]{0,8}\n)?[ -~\n]{0,64}") {
        let path = Path::new("src/ofApp.cpp");
        let once = stamp_content(&content, path);
        let twice = stamp_content(&once, path);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.starts_with("// File: src/ofApp.cpp\n"));
    }
}

#[test]
fn run_stamps_matching_files_with_relative_paths() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("widgets");
    fs::create_dir_all(root.join("inner"))?;
    fs::write(root.join("a.h"), "// File: old/path.h\n#pragma once\n")?;
    fs::write(root.join("inner/b.cpp"), "int b() { return 1; }\n")?;
    fs::write(root.join("notes.txt"), "// File: keep me\n")?;

    let report = PathStamper::new(StampConfig::new(&root))?.run()?;

    assert_eq!(fs::read_to_string(root.join("a.h"))?, "// File: a.h\n#pragma once\n");
    let expected_b = format!("{}int b() {{ return 1; }}\n", stamp_line(Path::new("inner/b.cpp")));
    assert_eq!(fs::read_to_string(root.join("inner/b.cpp"))?, expected_b);
    assert_eq!(fs::read_to_string(root.join("notes.txt"))?, "// File: keep me\n");

    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.changes.len(), 2);
    Ok(())
}

#[test]
fn second_run_reports_no_changes() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("main.cpp"), "int main() {}\n")?;

    let stamper = PathStamper::new(StampConfig::new(dir.path()))?;
    let first = stamper.run()?;
    let after_first = fs::read_to_string(dir.path().join("main.cpp"))?;
    let second = stamper.run()?;

    assert!(first.has_changes());
    assert!(!second.has_changes());
    assert_eq!(second.files_scanned, 1);
    assert_eq!(fs::read_to_string(dir.path().join("main.cpp"))?, after_first);
    Ok(())
}

#[test]
fn dry_run_leaves_files_untouched() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("main.cpp"), "int main() {}\n")?;

    let mut config = StampConfig::new(dir.path());
    config.dry_run = true;
    let report = PathStamper::new(config)?.run()?;

    assert!(report.dry_run);
    assert_eq!(report.changes[0].relative, PathBuf::from("main.cpp"));
    assert_eq!(fs::read_to_string(dir.path().join("main.cpp"))?, "int main() {}\n");
    Ok(())
}

#[test]
fn custom_extensions_are_respected() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.hpp"), "struct A;\n")?;
    fs::write(dir.path().join("b.cpp"), "int b;\n")?;

    let mut config = StampConfig::new(dir.path());
    config.extensions = vec![".hpp".to_string()];
    PathStamper::new(config)?.run()?;

    assert_eq!(fs::read_to_string(dir.path().join("a.hpp"))?, "// File: a.hpp\nstruct A;\n");
    assert_eq!(fs::read_to_string(dir.path().join("b.cpp"))?, "int b;\n");
    Ok(())
}

#[test]
fn non_utf8_file_aborts_run() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("bad.h"), b"\xff\xfe\n")?;

    let err = PathStamper::new(StampConfig::new(dir.path()))?
        .run()
        .unwrap_err();
    assert!(matches!(err, SrcmaintError::Encoding { .. }));
    Ok(())
}
