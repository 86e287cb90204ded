//! Course row command handlers
//!
//! Rows are numbered from 1 on the command line and from 0 inside the session.

use super::{fail, load_session, store_session};
use crate::args::{CourseSubcommand, CreditChoice, GradeChoice};
use fgpa_calc::config::Config;
use fgpa_calc::core::gpa::EntrySource;
use fgpa_calc::core::models::{CourseEntry, EntryUpdate, Semester, SemesterResult};
use fgpa_calc::info;

/// Dispatch course subcommands
pub fn run(action: CourseSubcommand, config: &Config) {
    match action {
        CourseSubcommand::Add {
            semester,
            name,
            grade,
            credit,
        } => handle_add(config, semester, name, grade, credit),
        CourseSubcommand::Set {
            semester,
            row,
            name,
            grade,
            credit,
        } => handle_set(config, semester, row, name, grade, credit),
        CourseSubcommand::Remove { semester, row } => handle_remove(config, semester, row),
        CourseSubcommand::Clear { semester } => handle_clear(config, semester),
    }
}

/// Handle `course add`
fn handle_add(
    config: &Config,
    semester: Semester,
    name: Option<String>,
    grade: Option<GradeChoice>,
    credit: Option<CreditChoice>,
) {
    let mut session = load_session(config);

    let mut entry = CourseEntry::blank();
    update_from_args(name, grade, credit).apply(&mut entry);
    let row = session.add_entry(semester, entry);
    store_session(config, &session);

    info!("Added row #{} to {semester}", row + 1);
    println!("✓ Added row #{} to {semester}", row + 1);
    print_semester_gpa(config, &session.semester_result(semester));
}

/// Handle `course set`
fn handle_set(
    config: &Config,
    semester: Semester,
    row: usize,
    name: Option<String>,
    grade: Option<GradeChoice>,
    credit: Option<CreditChoice>,
) {
    let update = update_from_args(name, grade, credit);
    if update.is_empty() {
        fail("Nothing to change; pass --name, --grade or --credit");
    }

    let mut session = load_session(config);
    let result = session
        .on_entry_changed(semester, row - 1, &update)
        .unwrap_or_else(|e| fail(&e.to_string()));
    store_session(config, &session);

    println!("✓ Updated row #{row} of {semester}");
    print_semester_gpa(config, &result);
}

/// Handle `course remove`
fn handle_remove(config: &Config, semester: Semester, row: usize) {
    let mut session = load_session(config);
    let (removed, result) = session
        .on_remove_entry(semester, row - 1)
        .unwrap_or_else(|e| fail(&e.to_string()));
    store_session(config, &session);

    if removed.course.is_empty() {
        println!("✓ Removed row #{row} from {semester}");
    } else {
        println!("✓ Removed row #{row} ({}) from {semester}", removed.course);
    }
    print_semester_gpa(config, &result);
}

/// Handle `course clear`
fn handle_clear(config: &Config, semester: Semester) {
    let mut session = load_session(config);
    let removed = session.entries(semester).len();
    session.clear_semester(semester);
    store_session(config, &session);

    info!("Cleared {removed} rows from {semester}");
    println!("✓ Cleared {semester} ({removed} rows)");
    let display = config.display_options();
    println!("{}", display.semester_line(None));
    println!("{}", display.year_line(&session.year_result(semester.year())));
}

/// Translate optional CLI values into a row update
fn update_from_args(
    name: Option<String>,
    grade: Option<GradeChoice>,
    credit: Option<CreditChoice>,
) -> EntryUpdate {
    EntryUpdate {
        course: name,
        grade: grade.map(|GradeChoice(g)| g),
        credit: credit.map(|CreditChoice(c)| c),
    }
}

fn print_semester_gpa(config: &Config, result: &SemesterResult) {
    println!("{}", config.display_options().semester_line(result.gpa));
}

#[cfg(test)]
mod tests {
    use super::*;
    use fgpa_calc::core::models::GradePoint;

    #[test]
    fn test_update_from_args_keeps_unset_fields() {
        let update = update_from_args(None, Some(GradeChoice(Some(GradePoint::B))), None);
        assert_eq!(update.course, None);
        assert_eq!(update.grade, Some(Some(GradePoint::B)));
        assert_eq!(update.credit, None);
        assert!(update_from_args(None, None, None).is_empty());
    }

    #[test]
    fn test_update_from_args_can_clear() {
        let mut entry = CourseEntry::new("Biology", GradePoint::A, 3.0);
        update_from_args(None, Some(GradeChoice(None)), Some(CreditChoice(None))).apply(&mut entry);
        assert_eq!(entry.course, "Biology");
        assert_eq!(entry.grade, None);
        assert_eq!(entry.credit, None);
    }
}
