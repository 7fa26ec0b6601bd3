use std::fs;
use std::path::Path;
use tempfile::tempdir;
use textstat_core::{analyze, read_document, read_document_lossy, SourceError};

#[test]
fn read_document_returns_content_and_records_source() {
    let dir = tempdir().expect("temp dir should be created");
    let path = dir.path().join("stanford.txt");
    fs::write(&path, "line1\nline2\nline3").expect("fixture write should succeed");

    let doc = read_document(&path).expect("read should succeed");

    assert_eq!(doc.content(), "line1\nline2\nline3");
    assert_eq!(doc.source(), Some(path.as_path()));

    let report = analyze(&doc);
    assert_eq!(report.lines, 3);
    assert_eq!(report.words, 3);
}

#[test]
fn missing_file_is_reported_as_not_found() {
    let dir = tempdir().expect("temp dir should be created");
    let path = dir.path().join("absent.txt");

    let err = read_document(&path).expect_err("missing file must fail");
    match err {
        SourceError::NotFound(reported) => assert_eq!(reported, path),
        other => panic!("expected NotFound, got {other}"),
    }
}

#[test]
fn invalid_utf8_fails_strictly_and_succeeds_lossily() {
    let dir = tempdir().expect("temp dir should be created");
    let path = dir.path().join("binaryish.txt");
    fs::write(&path, [b'o', b'k', 0xFF, 0xFE, b'!']).expect("fixture write should succeed");

    let err = read_document(&path).expect_err("invalid UTF-8 must fail strictly");
    assert!(matches!(err, SourceError::InvalidEncoding(_)));

    let doc = read_document_lossy(&path).expect("lossy read should succeed");
    assert!(doc.content().starts_with("ok"));
    assert!(doc.content().contains('\u{FFFD}'));
    assert!(doc.content().ends_with('!'));
}

#[test]
fn lossy_read_still_fails_for_missing_file() {
    let err = read_document_lossy(Path::new("/nonexistent/textstat/absent.txt"))
        .expect_err("missing file must fail even lossily");
    assert!(matches!(err, SourceError::NotFound(_)));
}

#[test]
fn error_messages_name_the_offending_path() {
    let dir = tempdir().expect("temp dir should be created");
    let path = dir.path().join("absent.txt");

    let err = read_document(&path).expect_err("missing file must fail");
    assert!(err.to_string().contains("absent.txt"));
}
