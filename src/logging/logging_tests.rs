//! Tests for log file setup.

use super::*;
use serial_test::serial;
use std::fs;

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tabview_test_logs_{}_{}", name, std::process::id()))
}

#[test]
fn split_keeps_directory_and_name() {
    let (dir, name) = split_log_path(Path::new("/var/log/tabview/tabview.log")).unwrap();
    assert_eq!(dir, PathBuf::from("/var/log/tabview"));
    assert_eq!(name, "tabview.log");
}

#[test]
fn bare_file_name_logs_to_current_directory() {
    let (dir, name) = split_log_path(Path::new("tabview.log")).unwrap();
    assert_eq!(dir, PathBuf::from("."));
    assert_eq!(name, "tabview.log");
}

#[test]
fn path_without_file_name_is_rejected() {
    assert!(matches!(
        split_log_path(Path::new("/")),
        Err(LoggingError::InvalidPath(_))
    ));
}

#[test]
#[serial(tracing_init)]
fn init_creates_log_directory_if_missing() {
    let test_dir = scratch_dir("create");
    let log_file = test_dir.join("nested").join("tabview.log");
    let _ = fs::remove_dir_all(&test_dir);

    // The subscriber may already be set by another test; the directory is
    // created before that check.
    let _ = init(&log_file);

    assert!(
        log_file.parent().is_some_and(Path::exists),
        "Log directory should be created: {:?}",
        log_file
    );
    let _ = fs::remove_dir_all(&test_dir);
}

#[test]
#[serial(tracing_init)]
fn second_init_reports_subscriber_already_set() {
    let test_dir = scratch_dir("twice");
    let log_file = test_dir.join("tabview.log");

    let _ = init(&log_file);
    let second = init(&log_file);

    assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));
    let _ = fs::remove_dir_all(&test_dir);
}
