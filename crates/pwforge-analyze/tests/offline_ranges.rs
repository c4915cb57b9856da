//! Breach lookup against an on-disk range directory.

use std::fs;

use pwforge_analyze::breach::{BreachChecker, BreachStatus, DirectoryRangeSource, sha1_hex, split_hash};
use pwforge_analyze::analyze_password;

fn write_range(dir: &std::path::Path, file_name: &str, body: &str) {
    fs::write(dir.join(file_name), body).expect("write range file");
}

#[test]
fn finds_password_in_plain_range_file() {
    let dir = tempfile::tempdir().unwrap();
    write_range(
        dir.path(),
        "5BAA6",
        "003D68EB55068C33ACE09247EE4C639306B:3\n1E4C9B93F3F0682250B6CF8331B7EE68FD8:10434004\n",
    );

    let checker = BreachChecker::new(DirectoryRangeSource::new(dir.path()));
    assert_eq!(checker.lookup("password"), BreachStatus::Found(10434004));
}

#[test]
fn finds_password_in_txt_range_file() {
    let dir = tempfile::tempdir().unwrap();
    let hash = sha1_hex("hunter2");
    let (prefix, suffix) = split_hash(&hash);
    write_range(dir.path(), &format!("{prefix}.txt"), &format!("{suffix}:17\n"));

    let checker = BreachChecker::new(DirectoryRangeSource::new(dir.path()));
    assert_eq!(checker.lookup("hunter2"), BreachStatus::Found(17));
    let report = analyze_password("hunter2", Some(&checker));
    assert_eq!(report.pwned_count, Some(17));
}

#[test]
fn absent_suffix_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    write_range(dir.path(), "5BAA6", "003D68EB55068C33ACE09247EE4C639306B:3\n");

    let checker = BreachChecker::new(DirectoryRangeSource::new(dir.path()));
    assert_eq!(checker.lookup("password"), BreachStatus::NotFound);
}

#[test]
fn missing_range_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let checker = BreachChecker::new(DirectoryRangeSource::new(dir.path()));
    let report = analyze_password("password", Some(&checker));
    assert_eq!(report.pwned_count, Some(-1));
}

#[test]
fn corrupt_range_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    write_range(dir.path(), "5BAA6", "garbage without separator\n");

    let checker = BreachChecker::new(DirectoryRangeSource::new(dir.path()));
    assert_eq!(checker.lookup("password"), BreachStatus::Unavailable);
}
