//! Markdown report generator
//!
//! Generates the results summary as Markdown tables, which render well in GitHub,
//! GitLab and most note-taking tools.

use crate::core::models::entry::format_credit;
use crate::core::models::{CourseEntry, GradePoint, Semester};
use crate::core::report::{format_credits, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/results.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{fgpa_line}}", &ctx.fgpa_line());
        output = output.replace("{{year_rows}}", &Self::generate_year_rows(ctx));
        output = output.replace("{{semester_sections}}", &Self::generate_semester_sections(ctx));

        output
    }

    /// Generate the per-year table body
    fn generate_year_rows(ctx: &ReportContext) -> String {
        let mut rows = String::new();

        for year in ctx.transcript.years() {
            let _ = writeln!(
                rows,
                "| {} | {} | {} | {} |",
                year.year,
                year.weight,
                ctx.display.gpa(year.gpa),
                format_credits(year.total_credits)
            );
        }

        rows
    }

    /// Generate one heading and table per semester that has rows
    fn generate_semester_sections(ctx: &ReportContext) -> String {
        let mut sections = String::new();

        for semester in ctx.filled_semesters() {
            let _ = writeln!(
                sections,
                "### {semester} (GPA: {})\n",
                ctx.semester_gpa(semester)
            );
            sections.push_str("| # | Course | Grade | Credit |\n");
            sections.push_str("|---|---|---|---|\n");

            for (i, entry) in Self::rows(ctx, semester).iter().enumerate() {
                let _ = writeln!(
                    sections,
                    "| {} | {} | {} | {} |",
                    i + 1,
                    escape_cell(&entry.course),
                    entry.grade.map_or("", GradePoint::symbol),
                    format_credit(entry.credit)
                );
            }
            sections.push('\n');
        }

        if sections.is_empty() {
            sections.push_str("_No courses entered._\n");
        }

        sections
    }

    fn rows<'c>(ctx: &'c ReportContext, semester: Semester) -> &'c [CourseEntry] {
        &ctx.session.all_entries()[semester.index()]
    }
}

/// Keep user text from breaking the table layout
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
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
    use crate::core::report::DisplayOptions;
    use crate::core::session::Session;

    #[test]
    fn test_markdown_tables() {
        let mut session = Session::new();
        let sem3 = Semester::new(3).unwrap();
        session.add_entry(sem3, CourseEntry::new("Data | Structures", GradePoint::AMinus, 4.0));
        let transcript = session.recompute_all();
        let display = DisplayOptions::default();
        let ctx = ReportContext::new(&session, &transcript, &display);

        let md = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(md.contains("**Weighted FGPA: 3.70**"));
        assert!(md.contains("| Year 2 | 0.2 | 3.70 | 4 |"));
        assert!(md.contains("| Year 1 | 0.2 | — | 0 |"));
        assert!(md.contains("### Semester 3 (GPA: 3.70)"));
        assert!(md.contains("| 1 | Data \\| Structures | A- | 4 |"));
        assert!(!md.contains("### Semester 1"));
    }

    #[test]
    fn test_markdown_empty_session() {
        let session = Session::new();
        let transcript = session.recompute_all();
        let display = DisplayOptions::default();
        let ctx = ReportContext::new(&session, &transcript, &display);

        let md = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(md.contains("_No courses entered._"));
        assert!(!md.contains("{{"));
    }
}
