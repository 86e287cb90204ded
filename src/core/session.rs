//! Session state: the course rows of all eight semesters
//!
//! The session is the single owner of entered data. Views read from it and every
//! edit goes through one of its command handlers, after which results are recomputed.

use crate::core::gpa::{self, EntrySource};
use crate::core::models::{
    CourseEntry, EntryUpdate, Semester, SemesterResult, Transcript, Year, YearResult,
    SEMESTER_COUNT,
};
use thiserror::Error;

/// Errors raised by session commands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The addressed row does not exist in that semester
    #[error("{semester} has no course row #{}", .row + 1)]
    NoSuchRow {
        /// Semester that was addressed
        semester: Semester,
        /// Zero-based row index that was requested
        row: usize,
    },
}

/// In-memory course rows for every semester
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    semesters: [Vec<CourseEntry>; SEMESTER_COUNT],
}

impl Session {
    /// Create an empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with one blank row in every semester
    #[must_use]
    pub fn with_starter_rows() -> Self {
        let mut session = Self::new();
        for semester in Semester::all() {
            session.add_entry(semester, CourseEntry::blank());
        }
        session
    }

    /// Build a session from per-semester entry lists
    #[must_use]
    pub const fn from_entries(semesters: [Vec<CourseEntry>; SEMESTER_COUNT]) -> Self {
        Self { semesters }
    }

    /// Per-semester entry lists in semester order
    #[must_use]
    pub const fn all_entries(&self) -> &[Vec<CourseEntry>; SEMESTER_COUNT] {
        &self.semesters
    }

    /// Number of rows across all semesters
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.semesters.iter().map(Vec::len).sum()
    }

    /// Returns true when no semester has any rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Append a row to `semester`, returning its zero-based row index
    pub fn add_entry(&mut self, semester: Semester, entry: CourseEntry) -> usize {
        let rows = &mut self.semesters[semester.index()];
        rows.push(entry);
        crate::debug!("Added row #{} to {semester}", rows.len());
        rows.len() - 1
    }

    /// Apply `update` to an existing row and return the semester's new result
    ///
    /// # Errors
    /// Returns [`SessionError::NoSuchRow`] if `row` is out of range.
    pub fn on_entry_changed(
        &mut self,
        semester: Semester,
        row: usize,
        update: &EntryUpdate,
    ) -> Result<SemesterResult, SessionError> {
        let entry = self.semesters[semester.index()]
            .get_mut(row)
            .ok_or(SessionError::NoSuchRow { semester, row })?;
        update.apply(entry);
        Ok(self.semester_result(semester))
    }

    /// Remove a row and return the semester's new result
    ///
    /// # Errors
    /// Returns [`SessionError::NoSuchRow`] if `row` is out of range.
    pub fn on_remove_entry(
        &mut self,
        semester: Semester,
        row: usize,
    ) -> Result<(CourseEntry, SemesterResult), SessionError> {
        let rows = &mut self.semesters[semester.index()];
        if row >= rows.len() {
            return Err(SessionError::NoSuchRow { semester, row });
        }
        let removed = rows.remove(row);
        Ok((removed, self.semester_result(semester)))
    }

    /// Discard every row of one semester
    pub fn clear_semester(&mut self, semester: Semester) {
        self.semesters[semester.index()].clear();
    }

    /// Discard every row of every semester
    pub fn clear_all(&mut self) {
        for rows in &mut self.semesters {
            rows.clear();
        }
    }

    /// Recompute the GPA of one semester
    #[must_use]
    pub fn semester_result(&self, semester: Semester) -> SemesterResult {
        gpa::aggregate(self.entries(semester))
    }

    /// Recompute the GPA of one academic year
    #[must_use]
    pub fn year_result(&self, year: Year) -> YearResult {
        let [first, second] = year.semesters();
        gpa::aggregate_year(year, [self.entries(first), self.entries(second)])
    }

    /// Recompute every semester and year and combine them into the final GPA
    #[must_use]
    pub fn recompute_all(&self) -> Transcript {
        gpa::compute_transcript(self)
    }
}

impl EntrySource for Session {
    fn entries(&self, semester: Semester) -> &[CourseEntry] {
        &self.semesters[semester.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::GradePoint;

    fn sem(n: u8) -> Semester {
        Semester::new(n).unwrap()
    }

    #[test]
    fn test_add_and_recompute_semester() {
        let mut session = Session::new();
        assert_eq!(session.add_entry(sem(1), CourseEntry::new("Calc", GradePoint::A, 3.0)), 0);
        assert_eq!(
            session.add_entry(sem(1), CourseEntry::new("Chem", GradePoint::BPlus, 4.0)),
            1
        );

        let result = session.semester_result(sem(1));
        assert!((result.gpa.unwrap() - 3.6).abs() < 1e-9);
        assert_eq!(session.semester_result(sem(2)).gpa, None);
        assert_eq!(session.row_count(), 2);
    }

    #[test]
    fn test_starter_rows() {
        let session = Session::with_starter_rows();
        assert_eq!(session.row_count(), 8);
        for semester in Semester::all() {
            assert_eq!(session.entries(semester), &[CourseEntry::blank()]);
            assert_eq!(session.semester_result(semester).gpa, None);
        }
    }

    #[test]
    fn test_entry_changed() {
        let mut session = Session::new();
        let row = session.add_entry(sem(3), CourseEntry::blank());

        let update = EntryUpdate {
            grade: Some(Some(GradePoint::B)),
            credit: Some(Some(3.0)),
            ..EntryUpdate::default()
        };
        let result = session.on_entry_changed(sem(3), row, &update).unwrap();
        assert!((result.gpa.unwrap() - 3.0).abs() < f64::EPSILON);

        let missing = session.on_entry_changed(sem(3), 5, &update);
        assert_eq!(
            missing,
            Err(SessionError::NoSuchRow {
                semester: sem(3),
                row: 5
            })
        );
    }

    #[test]
    fn test_remove_entry() {
        let mut session = Session::new();
        session.add_entry(sem(2), CourseEntry::new("Keep", GradePoint::A, 3.0));
        session.add_entry(sem(2), CourseEntry::new("Drop", GradePoint::E, 3.0));

        let (removed, result) = session.on_remove_entry(sem(2), 1).unwrap();
        assert_eq!(removed.course, "Drop");
        assert!((result.gpa.unwrap() - 4.0).abs() < f64::EPSILON);

        let err = session.on_remove_entry(sem(2), 1).unwrap_err();
        assert_eq!(err.to_string(), "Semester 2 has no course row #2");
    }

    #[test]
    fn test_year_result_spans_both_semesters() {
        let mut session = Session::new();
        session.add_entry(sem(5), CourseEntry::new("", GradePoint::A, 2.0));
        session.add_entry(sem(6), CourseEntry::new("", GradePoint::C, 2.0));

        let year = session.year_result(Year::new(3).unwrap());
        assert!((year.gpa.unwrap() - 3.0).abs() < f64::EPSILON);
        assert!((year.total_credits - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clear() {
        let mut session = Session::with_starter_rows();
        session.add_entry(sem(8), CourseEntry::new("", GradePoint::A, 3.0));

        session.clear_semester(sem(8));
        assert!(session.entries(sem(8)).is_empty());
        assert_eq!(session.row_count(), 7);

        session.clear_all();
        assert!(session.is_empty());
        assert_eq!(session.recompute_all().fgpa(), None);
    }

    #[test]
    fn test_recompute_all_twice_is_identical() {
        let mut session = Session::new();
        session.add_entry(sem(1), CourseEntry::new("", GradePoint::AMinus, 3.0));
        session.add_entry(sem(4), CourseEntry::new("", GradePoint::BMinus, 4.0));
        session.add_entry(sem(7), CourseEntry::new("", GradePoint::CPlus, 2.0));

        let first = session.recompute_all();
        let second = session.recompute_all();
        assert_eq!(first, second);
        assert!(first.fgpa().is_some());
    }
}
