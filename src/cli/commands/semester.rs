//! Semester view handler

use super::load_session;
use fgpa_calc::config::Config;
use fgpa_calc::core::gpa::EntrySource;
use fgpa_calc::core::models::entry::format_credit;
use fgpa_calc::core::models::{CourseEntry, GradePoint, Semester};

/// Width of the course column in the row listing
const COURSE_WIDTH: usize = 28;

/// Show the rows of `semester` and its GPA
pub fn run(semester: Semester, config: &Config) {
    let session = load_session(config);
    let display = config.display_options();
    let rows = session.entries(semester);

    println!("\n=== {semester} ({}) ===\n", semester.year());
    if rows.is_empty() {
        println!("  No course rows. Add one with `fgpa course add {}`.", semester.number());
    } else {
        println!("  {:>3}  {:<COURSE_WIDTH$}  {:<5}  Credit", "#", "Course", "Grade");
        for (i, entry) in rows.iter().enumerate() {
            println!("  {}", format_row(i + 1, entry));
        }
    }

    let result = session.semester_result(semester);
    println!();
    println!("{}", display.semester_line(result.gpa));
}

fn format_row(number: usize, entry: &CourseEntry) -> String {
    let course = if entry.course.is_empty() {
        "(unnamed)"
    } else {
        entry.course.as_str()
    };
    let grade = entry.grade.map_or("-", GradePoint::symbol);
    let credit = match format_credit(entry.credit) {
        c if c.is_empty() => "-".to_string(),
        c => c,
    };
    format!("{number:>3}  {course:<COURSE_WIDTH$}  {grade:<5}  {credit}")
}
