use std::fs;
use tempfile::tempdir;
use textstat_core::{tally_dir, DirTally, SourceError};

#[test]
fn tally_counts_files_and_directories_separately() {
    let dir = tempdir().expect("temp dir should be created");
    fs::write(dir.path().join("a.txt"), "a").expect("fixture write should succeed");
    fs::write(dir.path().join("b.txt"), "b").expect("fixture write should succeed");
    fs::create_dir(dir.path().join("sub_one")).expect("fixture dir should be created");
    fs::create_dir(dir.path().join("sub_two")).expect("fixture dir should be created");
    fs::create_dir(dir.path().join("sub_three")).expect("fixture dir should be created");

    let tally = tally_dir(dir.path()).expect("tally should succeed");
    assert_eq!(tally, DirTally { files: 2, dirs: 3 });
}

#[test]
fn tally_is_not_recursive() {
    let dir = tempdir().expect("temp dir should be created");
    let nested = dir.path().join("outer");
    fs::create_dir(&nested).expect("fixture dir should be created");
    fs::write(nested.join("inner.txt"), "hidden").expect("fixture write should succeed");

    let tally = tally_dir(dir.path()).expect("tally should succeed");
    assert_eq!(tally, DirTally { files: 0, dirs: 1 });
}

#[test]
fn empty_directory_yields_zero_tally() {
    let dir = tempdir().expect("temp dir should be created");
    let tally = tally_dir(dir.path()).expect("tally should succeed");
    assert_eq!(tally, DirTally::default());
}

#[test]
fn missing_directory_is_reported_as_not_found() {
    let dir = tempdir().expect("temp dir should be created");
    let path = dir.path().join("absent");

    let err = tally_dir(&path).expect_err("missing directory must fail");
    assert!(matches!(err, SourceError::NotFound(_)));
}
