//! Result presentation for the GPA calculator
//!
//! This module turns computed results into display strings and renders printable
//! summaries in several formats (plain text, Markdown, HTML). Nothing here computes
//! a GPA; it only formats what the session and transcript already hold.

pub mod formats;

use crate::core::models::{Semester, Transcript, YearResult};
use crate::core::session::Session;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Placeholder shown for a GPA that is not defined
pub const DEFAULT_PLACEHOLDER: &str = "—";

/// Decimal places shown for a GPA
pub const DEFAULT_PRECISION: usize = 2;

/// How numbers are shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Decimal places for GPA values
    pub precision: usize,
    /// Text shown instead of an undefined GPA
    pub placeholder: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl DisplayOptions {
    /// Format a GPA with these options
    #[must_use]
    pub fn gpa(&self, gpa: Option<f64>) -> String {
        format_gpa(gpa, self.precision, &self.placeholder)
    }

    /// `Semester GPA: 3.60`
    #[must_use]
    pub fn semester_line(&self, gpa: Option<f64>) -> String {
        format!("Semester GPA: {}", self.gpa(gpa))
    }

    /// `Year 1 (weight 0.2): Year GPA = 3.60  (total credits: 7)`
    #[must_use]
    pub fn year_line(&self, result: &YearResult) -> String {
        format!(
            "{} (weight {}): Year GPA = {}  (total credits: {})",
            result.year,
            result.weight,
            self.gpa(result.gpa),
            format_credits(result.total_credits)
        )
    }

    /// `Weighted FGPA: 3.60`
    #[must_use]
    pub fn fgpa_line(&self, fgpa: Option<f64>) -> String {
        format!("Weighted FGPA: {}", self.gpa(fgpa))
    }
}

/// Format a GPA to `precision` decimals, or `placeholder` when undefined
#[must_use]
pub fn format_gpa(gpa: Option<f64>, precision: usize, placeholder: &str) -> String {
    gpa.map_or_else(|| placeholder.to_string(), |g| format!("{g:.precision$}"))
}

/// Format a credit total without a trailing `.0` (`7`, `7.5`)
#[must_use]
pub fn format_credits(credits: f64) -> String {
    credits.to_string()
}

/// Data context for report generation
///
/// Aggregates the entered rows, their computed results and the display settings,
/// so every format renders from the same source.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Entered course rows
    pub session: &'a Session,
    /// Results computed from `session`
    pub transcript: &'a Transcript,
    /// Number formatting
    pub display: &'a DisplayOptions,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        session: &'a Session,
        transcript: &'a Transcript,
        display: &'a DisplayOptions,
    ) -> Self {
        Self {
            session,
            transcript,
            display,
        }
    }

    /// The weighted FGPA line
    #[must_use]
    pub fn fgpa_line(&self) -> String {
        self.display.fgpa_line(self.transcript.fgpa())
    }

    /// One line per academic year, in year order
    #[must_use]
    pub fn year_lines(&self) -> Vec<String> {
        self.transcript
            .years()
            .iter()
            .map(|year| self.display.year_line(year))
            .collect()
    }

    /// Formatted GPA of one semester
    #[must_use]
    pub fn semester_gpa(&self, semester: Semester) -> String {
        self.display.gpa(self.transcript.semester(semester).gpa)
    }

    /// Semesters that have at least one row
    pub fn filled_semesters(&self) -> impl Iterator<Item = Semester> + '_ {
        Semester::all().filter(|sem| !self.session.all_entries()[sem.index()].is_empty())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
