//! Core module: grade models, GPA computation, session state, persistence and reports

pub mod config;
pub mod gpa;
pub mod models;
pub mod report;
pub mod session;
pub mod storage;

/// Returns the current version of the `fgpa-calc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
