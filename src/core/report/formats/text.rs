//! Plain text report generator
//!
//! Renders the same lines the calculator prints after a recompute, followed by a
//! one-line summary per semester.

use crate::core::models::{GradePoint, Semester};
use crate::core::report::{format_credits, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded text report template
const TEXT_TEMPLATE: &str = include_str!("../templates/results.txt");

/// Plain text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = TEXT_TEMPLATE.to_string();

        output = output.replace("{{fgpa_line}}", &ctx.fgpa_line());
        output = output.replace("{{year_lines}}", &ctx.year_lines().join("\n"));
        output = output.replace("{{semester_lines}}", &Self::semester_lines(ctx));

        output
    }

    /// One summary line per semester, then its rows indented below it
    fn semester_lines(ctx: &ReportContext) -> String {
        let mut lines = String::new();

        for semester in Semester::all() {
            let result = ctx.transcript.semester(semester);
            let rows = &ctx.session.all_entries()[semester.index()];
            let _ = writeln!(
                lines,
                "{semester}: GPA {} ({} credits, {} rows)",
                ctx.semester_gpa(semester),
                format_credits(result.total_credits),
                rows.len()
            );

            for (i, entry) in rows.iter().enumerate() {
                let course = if entry.course.is_empty() {
                    "(unnamed)"
                } else {
                    entry.course.as_str()
                };
                let _ = writeln!(
                    lines,
                    "  {}. {course}  {}  {}",
                    i + 1,
                    entry.grade.map_or("-", GradePoint::symbol),
                    entry.credit.map_or_else(|| "-".to_string(), format_credits)
                );
            }
        }

        lines
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CourseEntry;
    use crate::core::report::DisplayOptions;
    use crate::core::session::Session;

    #[test]
    fn test_text_report() {
        let mut session = Session::new();
        let sem = Semester::new(2).unwrap();
        session.add_entry(sem, CourseEntry::new("Physics", GradePoint::E, 3.0));
        session.add_entry(sem, CourseEntry::new("Art", GradePoint::APlus, 3.0));
        let transcript = session.recompute_all();
        let display = DisplayOptions::default();
        let ctx = ReportContext::new(&session, &transcript, &display);

        let text = TextReporter::new().render(&ctx).unwrap();
        assert!(text.starts_with("GPA & FGPA Results"));
        assert!(text.contains("Weighted FGPA: 2.00"));
        assert!(text.contains("Year 1 (weight 0.2): Year GPA = 2.00  (total credits: 6)"));
        assert!(text.contains("Semester 2: GPA 2.00 (6 credits, 2 rows)"));
        assert!(text.contains("  1. Physics  E  3"));
        assert!(text.contains("Semester 8: GPA — (0 credits, 0 rows)"));
        assert!(!text.contains("{{"));
    }

    #[test]
    fn test_generate_writes_file() {
        let session = Session::with_starter_rows();
        let transcript = session.recompute_all();
        let display = DisplayOptions::default();
        let ctx = ReportContext::new(&session, &transcript, &display);

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("results.txt");
        TextReporter::new().generate(&ctx, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Weighted FGPA: —"));
        assert!(written.contains("  1. (unnamed)  -  -"));
    }
}
