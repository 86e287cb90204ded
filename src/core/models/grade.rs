//! Letter grades and the fixed 4.0 grade-point table

use std::fmt;
use std::str::FromStr;

/// A letter grade from the fixed 12-symbol scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradePoint {
    /// A+ (4.00, same value as A)
    APlus,
    /// A (4.00)
    A,
    /// A- (3.70)
    AMinus,
    /// B+ (3.30)
    BPlus,
    /// B (3.00)
    B,
    /// B- (2.70)
    BMinus,
    /// C+ (2.30)
    CPlus,
    /// C (2.00)
    C,
    /// C- (1.70)
    CMinus,
    /// D+ (1.30)
    DPlus,
    /// D (1.00)
    D,
    /// E (0.00)
    E,
}

impl GradePoint {
    /// Every grade in table order, best first
    pub const ALL: [Self; 12] = [
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::E,
    ];

    /// Grade points on the 4.0 scale.
    ///
    /// A+ and A share 4.00; the scale has no separate value for A+.
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::APlus | Self::A => 4.00,
            Self::AMinus => 3.70,
            Self::BPlus => 3.30,
            Self::B => 3.00,
            Self::BMinus => 2.70,
            Self::CPlus => 2.30,
            Self::C => 2.00,
            Self::CMinus => 1.70,
            Self::DPlus => 1.30,
            Self::D => 1.00,
            Self::E => 0.00,
        }
    }

    /// The letter symbol as entered by the student (e.g. `"B+"`)
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::E => "E",
        }
    }
}

impl FromStr for GradePoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        Self::ALL
            .into_iter()
            .find(|grade| grade.symbol() == symbol)
            .ok_or_else(|| format!("Unknown grade: '{symbol}'"))
    }
}

impl fmt::Display for GradePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Lenient conversion used for stored and UI-supplied grade strings.
///
/// Blank and unrecognised symbols become "no selection".
#[must_use]
pub fn parse_grade(raw: &str) -> Option<GradePoint> {
    raw.parse().ok()
}

/// Grade points for an optional grade; "no selection" counts as 0.
#[must_use]
pub fn points_of(grade: Option<GradePoint>) -> f64 {
    grade.map_or(0.0, GradePoint::points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_table_values() {
        let expected = [
            4.00, 4.00, 3.70, 3.30, 3.00, 2.70, 2.30, 2.00, 1.70, 1.30, 1.00, 0.00,
        ];
        for (grade, points) in GradePoint::ALL.iter().zip(expected) {
            assert!(
                (grade.points() - points).abs() < f64::EPSILON,
                "{grade} should be worth {points}"
            );
        }
    }

    #[test]
    fn test_a_plus_collides_with_a() {
        assert!((GradePoint::APlus.points() - GradePoint::A.points()).abs() < f64::EPSILON);
        assert_ne!(GradePoint::APlus, GradePoint::A);
    }

    #[test]
    fn test_parse_symbols() {
        for grade in GradePoint::ALL {
            assert_eq!(grade.symbol().parse::<GradePoint>(), Ok(grade));
        }
        assert_eq!(" B+ ".parse::<GradePoint>(), Ok(GradePoint::BPlus));
        assert!("F".parse::<GradePoint>().is_err());
        assert!("a".parse::<GradePoint>().is_err());
    }

    #[test]
    fn test_unset_and_unknown_are_zero() {
        assert!(points_of(None).abs() < f64::EPSILON);
        assert!(points_of(parse_grade("")).abs() < f64::EPSILON);
        assert!(points_of(parse_grade("Z")).abs() < f64::EPSILON);
        assert!((points_of(parse_grade("A-")) - 3.70).abs() < f64::EPSILON);
    }
}
