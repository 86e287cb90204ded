//! HTML report generator
//!
//! Renders a self-contained printable page with the weighted FGPA, the year lines and
//! one table per semester. User-entered course names are escaped by the template engine.

use crate::core::models::entry::format_credit;
use crate::core::models::GradePoint;
use crate::core::report::{format_credits, ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Printable results page
#[derive(Template)]
#[template(path = "print.html")]
struct PrintPage<'a> {
    fgpa_line: String,
    year_lines: Vec<String>,
    semesters: Vec<SemesterTable<'a>>,
}

struct SemesterTable<'a> {
    label: String,
    gpa: String,
    credits: String,
    rows: Vec<RowView<'a>>,
}

struct RowView<'a> {
    number: usize,
    course: &'a str,
    grade: &'static str,
    credit: String,
}

/// HTML report generator for printing
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn build_page<'a>(ctx: &ReportContext<'a>) -> PrintPage<'a> {
        let session = ctx.session;
        let semesters = ctx
            .filled_semesters()
            .map(|semester| SemesterTable {
                label: semester.to_string(),
                gpa: ctx.semester_gpa(semester),
                credits: format_credits(ctx.transcript.semester(semester).total_credits),
                rows: session.all_entries()[semester.index()]
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| RowView {
                        number: i + 1,
                        course: &entry.course,
                        grade: entry.grade.map_or("", GradePoint::symbol),
                        credit: format_credit(entry.credit),
                    })
                    .collect(),
            })
            .collect();

        PrintPage {
            fgpa_line: ctx.fgpa_line(),
            year_lines: ctx.year_lines(),
            semesters,
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::build_page(ctx).render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CourseEntry, Semester};
    use crate::core::report::DisplayOptions;
    use crate::core::session::Session;

    fn render(session: &Session) -> String {
        let transcript = session.recompute_all();
        let display = DisplayOptions::default();
        let ctx = ReportContext::new(session, &transcript, &display);
        HtmlReporter::new().render(&ctx).unwrap()
    }

    #[test]
    fn test_print_page_contents() {
        let mut session = Session::new();
        let sem1 = Semester::new(1).unwrap();
        session.add_entry(sem1, CourseEntry::new("Calculus", GradePoint::A, 3.0));
        session.add_entry(sem1, CourseEntry::new("Chemistry", GradePoint::BPlus, 4.0));

        let html = render(&session);
        assert!(html.contains("GPA &amp; FGPA Results"));
        assert!(html.contains("Weighted FGPA: 3.60"));
        assert!(html.contains("Year 1 (weight 0.2): Year GPA = 3.60  (total credits: 7)"));
        assert!(html.contains("Year 4 (weight 0.3): Year GPA = —  (total credits: 0)"));
        assert!(html.contains("<td>Chemistry</td><td>B+</td><td>4</td>"));
        assert!(!html.contains("Semester 2 (GPA"));
    }

    #[test]
    fn test_course_names_are_escaped() {
        let mut session = Session::new();
        session.add_entry(
            Semester::new(4).unwrap(),
            CourseEntry::new("<script>x</script>", GradePoint::C, 2.0),
        );

        let html = render(&session);
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
