//! Course entries as entered for one semester

use super::grade::{points_of, GradePoint};
use super::results::Totals;

/// Credit values offered when a course row is created.
/// A blank choice ("None") is offered alongside them and means no credit.
pub const CREDIT_OPTIONS: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// One course row of a semester
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseEntry {
    /// Course name (free text, not used in computation)
    pub course: String,

    /// Letter grade, `None` when no grade has been selected
    pub grade: Option<GradePoint>,

    /// Credit value, `None` when no credit has been selected
    pub credit: Option<f64>,
}

impl CourseEntry {
    /// Create an entry with both grade and credit selected
    #[must_use]
    pub fn new(course: impl Into<String>, grade: GradePoint, credit: f64) -> Self {
        Self {
            course: course.into(),
            grade: Some(grade),
            credit: sanitize_credit(credit),
        }
    }

    /// Create a blank row (no name, grade or credit)
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Credit counted towards totals (0 when unset)
    #[must_use]
    pub fn credit_value(&self) -> f64 {
        self.credit.unwrap_or(0.0)
    }

    /// Grade points of this entry (0 when no grade is selected)
    #[must_use]
    pub fn points(&self) -> f64 {
        points_of(self.grade)
    }

    /// Quality points contributed by this entry (points × credit)
    #[must_use]
    pub fn quality_points(&self) -> f64 {
        self.points() * self.credit_value()
    }

    /// Quality points and credit of this entry as running totals
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals {
            quality_points: self.quality_points(),
            credits: self.credit_value(),
        }
    }
}

/// Partial update applied to an existing entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryUpdate {
    /// New course name
    pub course: Option<String>,
    /// New grade selection (`Some(None)` clears the grade)
    pub grade: Option<Option<GradePoint>>,
    /// New credit selection (`Some(None)` clears the credit)
    pub credit: Option<Option<f64>>,
}

impl EntryUpdate {
    /// Apply this update to `entry`, leaving unspecified fields untouched
    pub fn apply(&self, entry: &mut CourseEntry) {
        if let Some(course) = &self.course {
            entry.course.clone_from(course);
        }
        if let Some(grade) = self.grade {
            entry.grade = grade;
        }
        if let Some(credit) = self.credit {
            entry.credit = credit.and_then(sanitize_credit);
        }
    }

    /// Returns true when the update changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.course.is_none() && self.grade.is_none() && self.credit.is_none()
    }
}

/// Lenient credit conversion for stored and UI-supplied strings.
///
/// Blank, non-numeric, negative and non-finite values become "no selection".
#[must_use]
pub fn parse_credit(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().and_then(sanitize_credit)
}

/// Render a credit the way it is stored (`""` for no selection, `"3"`, `"1.5"`)
#[must_use]
pub fn format_credit(credit: Option<f64>) -> String {
    credit.map_or_else(String::new, |c| c.to_string())
}

fn sanitize_credit(credit: f64) -> Option<f64> {
    (credit.is_finite() && credit >= 0.0).then_some(credit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CourseEntry::new("Linear Algebra", GradePoint::BPlus, 4.0);

        assert_eq!(entry.course, "Linear Algebra");
        assert_eq!(entry.grade, Some(GradePoint::BPlus));
        assert!((entry.credit_value() - 4.0).abs() < f64::EPSILON);
        assert!((entry.quality_points() - 13.2).abs() < 1e-9);
        assert!((entry.totals().credits - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_blank_entry_contributes_nothing() {
        let entry = CourseEntry::blank();

        assert!(entry.credit_value().abs() < f64::EPSILON);
        assert!(entry.quality_points().abs() < f64::EPSILON);
        assert_eq!(entry.totals(), Totals::default());
    }

    #[test]
    fn test_parse_credit() {
        assert_eq!(parse_credit("3"), Some(3.0));
        assert_eq!(parse_credit(" 1.5 "), Some(1.5));
        assert_eq!(parse_credit(""), None);
        assert_eq!(parse_credit(" "), None);
        assert_eq!(parse_credit("three"), None);
        assert_eq!(parse_credit("-2"), None);
        assert_eq!(parse_credit("NaN"), None);
        assert_eq!(parse_credit("inf"), None);
    }

    #[test]
    fn test_format_credit() {
        assert_eq!(format_credit(None), "");
        assert_eq!(format_credit(Some(3.0)), "3");
        assert_eq!(format_credit(Some(1.5)), "1.5");
        assert_eq!(parse_credit(&format_credit(Some(2.0))), Some(2.0));
    }

    #[test]
    fn test_entry_update() {
        let mut entry = CourseEntry::new("Physics", GradePoint::C, 3.0);

        let update = EntryUpdate {
            grade: Some(Some(GradePoint::AMinus)),
            ..EntryUpdate::default()
        };
        update.apply(&mut entry);
        assert_eq!(entry.grade, Some(GradePoint::AMinus));
        assert_eq!(entry.credit, Some(3.0));
        assert_eq!(entry.course, "Physics");

        let clear_credit = EntryUpdate {
            credit: Some(None),
            ..EntryUpdate::default()
        };
        clear_credit.apply(&mut entry);
        assert_eq!(entry.credit, None);
        assert!(EntryUpdate::default().is_empty());
    }
}
