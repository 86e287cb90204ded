//! Semester and academic-year identifiers
//!
//! A program spans eight semesters grouped into four academic years:
//! Year 1 = semesters 1–2, Year 2 = 3–4, Year 3 = 5–6, Year 4 = 7–8.

use std::fmt;

/// Number of semesters in a program
pub const SEMESTER_COUNT: usize = 8;

/// Number of academic years in a program
pub const YEAR_COUNT: usize = 4;

/// Fixed contribution of each year to the final GPA, indexed by year - 1
pub const YEAR_WEIGHTS: [f64; YEAR_COUNT] = [0.2, 0.2, 0.3, 0.3];

/// A semester number in `1..=8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Semester(u8);

impl Semester {
    /// Create a semester identifier, `None` when outside `1..=8`
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number as usize <= SEMESTER_COUNT {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Semester at zero-based position `index`; callers keep `index < SEMESTER_COUNT`
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_index(index: usize) -> Self {
        debug_assert!(index < SEMESTER_COUNT);
        Self(index as u8 + 1)
    }

    /// All semesters in order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=SEMESTER_COUNT as u8).map(Self)
    }

    /// Semester number (1-based)
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based position, usable as an array index
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Academic year this semester belongs to
    #[must_use]
    pub const fn year(self) -> Year {
        Year((self.0 - 1) / 2 + 1)
    }

    /// Key used for this semester in the persistence format (`"sem3"`)
    #[must_use]
    pub fn storage_key(self) -> String {
        format!("sem{}", self.0)
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Semester {}", self.0)
    }
}

/// An academic year in `1..=4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(u8);

impl Year {
    /// Create a year identifier, `None` when outside `1..=4`
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number as usize <= YEAR_COUNT {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Year at zero-based position `index`; callers keep `index < YEAR_COUNT`
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_index(index: usize) -> Self {
        debug_assert!(index < YEAR_COUNT);
        Self(index as u8 + 1)
    }

    /// Year number (1-based)
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based position, usable as an array index
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// The two semesters forming this year: `2y - 1` and `2y`
    #[must_use]
    pub const fn semesters(self) -> [Semester; 2] {
        [Semester(2 * self.0 - 1), Semester(2 * self.0)]
    }

    /// Fixed weight of this year in the final GPA
    #[must_use]
    pub const fn weight(self) -> f64 {
        YEAR_WEIGHTS[self.index()]
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year {}", self.0)
    }
}
