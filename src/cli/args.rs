//! CLI argument definitions for `fgpa`

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use fgpa_calc::config::ConfigOverrides;
use fgpa_calc::core::models::entry::CREDIT_OPTIONS;
use fgpa_calc::core::models::{GradePoint, Semester};
use fgpa_calc::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// A grade given on the command line; `none` clears the selection
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GradeChoice(pub Option<GradePoint>);

/// A credit given on the command line; `none` clears the selection
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CreditChoice(pub Option<f64>);

fn is_none_word(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || raw.eq_ignore_ascii_case("none")
}

/// Parse `A+`, `B-`, ... or `none`
fn parse_grade_choice(raw: &str) -> Result<GradeChoice, String> {
    if is_none_word(raw) {
        return Ok(GradeChoice(None));
    }
    raw.parse::<GradePoint>().map(|g| GradeChoice(Some(g))).map_err(|_| {
        let symbols: Vec<&str> = GradePoint::ALL.iter().map(|g| g.symbol()).collect();
        format!("expected one of {} or none", symbols.join(", "))
    })
}

/// Parse one of the offered credit values (`1`..=`8`) or `none`
fn parse_credit_choice(raw: &str) -> Result<CreditChoice, String> {
    if is_none_word(raw) {
        return Ok(CreditChoice(None));
    }
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|c| CREDIT_OPTIONS.contains(c))
        .map(|c| CreditChoice(Some(f64::from(c))))
        .ok_or_else(|| format!("expected a credit value from 1 to 8 or none, got '{raw}'"))
}

/// Parse a semester number in `1..=8`
fn parse_semester(raw: &str) -> Result<Semester, String> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .and_then(Semester::new)
        .ok_or_else(|| format!("expected a semester from 1 to 8, got '{raw}'"))
}

/// Parse a 1-based row number as shown by `fgpa semester`
fn parse_row(raw: &str) -> Result<usize, String> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|row| *row >= 1)
        .ok_or_else(|| format!("expected a row number starting at 1, got '{raw}'"))
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `save_file`, `precision`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Add a course row to a semester.
    Add {
        /// Semester number (1-8)
        #[arg(value_name = "SEM", value_parser = parse_semester)]
        semester: Semester,
        /// Course name
        #[arg(short, long)]
        name: Option<String>,
        /// Letter grade (A+, A, A-, B+, B, B-, C+, C, C-, D+, D, E) or none
        #[arg(short, long, value_parser = parse_grade_choice)]
        grade: Option<GradeChoice>,
        /// Credit value (1-8) or none
        #[arg(short, long, value_parser = parse_credit_choice)]
        credit: Option<CreditChoice>,
    },
    /// Change the name, grade or credit of an existing row.
    Set {
        /// Semester number (1-8)
        #[arg(value_name = "SEM", value_parser = parse_semester)]
        semester: Semester,
        /// Row number as listed by `fgpa semester`
        #[arg(value_name = "ROW", value_parser = parse_row)]
        row: usize,
        /// New course name
        #[arg(short, long)]
        name: Option<String>,
        /// New letter grade or none
        #[arg(short, long, value_parser = parse_grade_choice)]
        grade: Option<GradeChoice>,
        /// New credit value or none
        #[arg(short, long, value_parser = parse_credit_choice)]
        credit: Option<CreditChoice>,
    },
    /// Remove a row from a semester.
    Remove {
        /// Semester number (1-8)
        #[arg(value_name = "SEM", value_parser = parse_semester)]
        semester: Semester,
        /// Row number as listed by `fgpa semester`
        #[arg(value_name = "ROW", value_parser = parse_row)]
        row: usize,
    },
    /// Remove every row of one semester.
    Clear {
        /// Semester number (1-8)
        #[arg(value_name = "SEM", value_parser = parse_semester)]
        semester: Semester,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Add, edit or remove course rows.
    Course {
        #[command(subcommand)]
        action: CourseSubcommand,
    },
    /// Show the rows and GPA of one semester.
    Semester {
        /// Semester number (1-8)
        #[arg(value_name = "SEM", value_parser = parse_semester)]
        semester: Semester,
    },
    /// Recompute every semester and year and show the weighted FGPA.
    Calc,
    /// Render printable results.
    Print {
        /// Output format: text, markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,
        /// Write to this file instead of standard output
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Save all semesters to the snapshot file.
    Save,
    /// Replace the working session with the saved snapshot.
    Load,
    /// Remove every course row and the saved snapshot (requires confirmation).
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "fgpa",
    about = "Semester, year and weighted final GPA calculator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Use this working session file for this run
    #[arg(long, value_name = "PATH", global = true)]
    pub session_file: Option<PathBuf>,

    /// Use this snapshot file for save/load/clear
    #[arg(long, value_name = "PATH", global = true)]
    pub save_file: Option<PathBuf>,

    /// Directory for printed reports
    #[arg(long, value_name = "DIR", global = true)]
    pub reports_dir: Option<PathBuf>,

    /// Decimal places shown for GPA values
    #[arg(long, value_name = "DIGITS", global = true)]
    pub precision: Option<usize>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override; the configuration file is never modified.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.log_level.map(|lvl| lvl.to_string()),
            file: self.log_file.as_ref().map(path_string),
            verbose: self.verbose.then_some(true),
            session_file: self.session_file.as_ref().map(path_string),
            save_file: self.save_file.as_ref().map(path_string),
            reports_dir: self.reports_dir.as_ref().map(path_string),
            precision: self.precision,
        }
    }
}
