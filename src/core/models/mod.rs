//! Data models for the GPA calculator

pub mod entry;
pub mod grade;
pub mod results;
pub mod term;

pub use entry::{CourseEntry, EntryUpdate};
pub use grade::GradePoint;
pub use results::{FinalResult, SemesterResult, Totals, Transcript, YearResult};
pub use term::{Semester, Year, SEMESTER_COUNT, YEAR_COUNT, YEAR_WEIGHTS};
