//! Library for the `fgpa` calculator
//! Contains the grade model, GPA engine, session, persistence and report rendering
//! used by the CLI.

pub mod core;
pub mod logger;

pub use self::core::{config, get_version};
