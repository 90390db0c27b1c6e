use std::path::PathBuf;
use std::time::Duration;

use filetally_core::{CountConfig, CountError, CountReport};

#[test]
fn test_config_round_trips_through_builder() {
    let config = CountConfig::builder()
        .root("relative/dir")
        .build()
        .unwrap();

    assert_eq!(config.root, PathBuf::from("relative/dir"));
    assert!(!config.follow_symlinks);

    let with_links = CountConfig::builder()
        .root("relative/dir")
        .follow_symlinks(true)
        .build()
        .unwrap();
    assert!(with_links.follow_symlinks);
}

#[test]
fn test_report_preserves_root_spelling() {
    // The console output echoes the caller's path verbatim, so the report
    // must not normalize it.
    let report = CountReport::new("./some/../dir", 7, Duration::from_secs(1));
    assert_eq!(report.root, PathBuf::from("./some/../dir"));
}

#[test]
fn test_missing_root_is_not_an_error() {
    let report = CountReport::missing("/nope");
    assert!(!report.root_found);
    assert_eq!(report.files, 0);
}

#[test]
fn test_error_display_includes_path() {
    let err = CountError::SymlinkCycle {
        path: PathBuf::from("/loops/here"),
    };
    assert_eq!(err.to_string(), "Symbolic link cycle at /loops/here");
}
