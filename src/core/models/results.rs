//! Derived GPA results
//!
//! Every value here is recomputed from course entries; nothing is edited in place.

use super::term::{Semester, Year, SEMESTER_COUNT, YEAR_COUNT};

/// Running credit-weighted totals
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    /// Sum of grade points × credit
    pub quality_points: f64,
    /// Sum of credits
    pub credits: f64,
}

impl Totals {
    /// Credit-weighted average, `None` when no credits were accumulated.
    ///
    /// Sums that overflowed to infinity also give `None`, never NaN.
    #[must_use]
    pub fn gpa(&self) -> Option<f64> {
        (self.credits > 0.0)
            .then(|| self.quality_points / self.credits)
            .filter(|gpa| gpa.is_finite())
    }
}

impl std::ops::Add for Totals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            quality_points: self.quality_points + rhs.quality_points,
            credits: self.credits + rhs.credits,
        }
    }
}

/// GPA of one semester
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemesterResult {
    /// Sum of grade points × credit
    pub total_quality_points: f64,
    /// Sum of credits
    pub total_credits: f64,
    /// Semester GPA, `None` when the semester has no credits
    pub gpa: Option<f64>,
}

impl SemesterResult {
    /// Build a result from accumulated totals
    #[must_use]
    pub fn from_totals(totals: Totals) -> Self {
        Self {
            total_quality_points: totals.quality_points,
            total_credits: totals.credits,
            gpa: totals.gpa(),
        }
    }
}

/// GPA of one academic year (both of its semesters)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearResult {
    /// Year these totals belong to
    pub year: Year,
    /// Fixed weight of this year in the final GPA
    pub weight: f64,
    /// Sum of grade points × credit over both semesters
    pub total_quality_points: f64,
    /// Sum of credits over both semesters
    pub total_credits: f64,
    /// Year GPA, `None` when the year has no credits
    pub gpa: Option<f64>,
}

impl YearResult {
    /// Build a result for `year` from accumulated totals
    #[must_use]
    pub fn from_totals(year: Year, totals: Totals) -> Self {
        Self {
            year,
            weight: year.weight(),
            total_quality_points: totals.quality_points,
            total_credits: totals.credits,
            gpa: totals.gpa(),
        }
    }
}

/// Weighted final GPA together with the year results it was built from
#[derive(Debug, Clone, PartialEq)]
pub struct FinalResult {
    /// Weighted FGPA, `None` when no year has credits
    pub fgpa: Option<f64>,
    /// Sum of the weights of the years that contributed
    pub used_weight: f64,
    /// Per-year results in year order, including years without data
    pub per_year: [YearResult; YEAR_COUNT],
}

/// Output of a full recomputation over all eight semesters
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    /// Per-semester results in semester order
    pub semesters: [SemesterResult; SEMESTER_COUNT],
    /// Year results and the weighted final GPA
    pub final_result: FinalResult,
}

impl Transcript {
    /// Weighted final GPA
    #[must_use]
    pub const fn fgpa(&self) -> Option<f64> {
        self.final_result.fgpa
    }

    /// Year results in order
    #[must_use]
    pub const fn years(&self) -> &[YearResult; YEAR_COUNT] {
        &self.final_result.per_year
    }

    /// Result for a single semester
    #[must_use]
    pub fn semester(&self, semester: Semester) -> &SemesterResult {
        &self.semesters[semester.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_credits_is_undefined_not_zero() {
        assert_eq!(Totals::default().gpa(), None);

        let all_e = Totals {
            quality_points: 0.0,
            credits: 6.0,
        };
        assert_eq!(all_e.gpa(), Some(0.0));
    }

    #[test]
    fn test_overflowed_totals_have_no_gpa() {
        let huge = Totals {
            quality_points: f64::INFINITY,
            credits: f64::INFINITY,
        };
        assert_eq!(huge.gpa(), None);

        let huge_points = Totals {
            quality_points: f64::INFINITY,
            credits: 3.0,
        };
        assert_eq!(huge_points.gpa(), None);
    }

    #[test]
    fn test_totals_add() {
        let a = Totals {
            quality_points: 12.0,
            credits: 3.0,
        };
        let b = Totals {
            quality_points: 13.2,
            credits: 4.0,
        };
        let sum = a + b;
        assert!((sum.quality_points - 25.2).abs() < 1e-9);
        assert!((sum.credits - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_year_result_carries_weight() {
        let year = Year::new(3).unwrap();
        let result = YearResult::from_totals(year, Totals::default());
        assert!((result.weight - 0.3).abs() < f64::EPSILON);
        assert_eq!(result.gpa, None);
    }
}
