//! Integration smoke tests for `fgpa_calc`

use fgpa_calc::get_version;
use fgpa_calc::logger::{self, Level};

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn logger_level_round_trips_through_strings() {
    assert!(logger::set_level_from_str("INFO"));
    assert_eq!(logger::level(), Level::Info);
    assert_eq!(logger::level().to_string(), "info");
    assert!(!logger::set_level_from_str("chatty"));
    assert_eq!(logger::level(), Level::Info);

    logger::set_level(Level::Warn);
    fgpa_calc::warn!("smoke test warning {}", 1);
}

#[test]
fn file_logging_writes_tagged_lines() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("logs").join("fgpa.log");

    if logger::init_file_logging(&path) {
        fgpa_calc::error!("written to file");
        let content = std::fs::read_to_string(&path).expect("log file exists");
        assert!(content.contains("[ERROR] written to file"));
    }
}
