//! Semester, year and weighted final GPA computation
//!
//! All functions here are pure: they read course entries and return fresh results.
//! Missing data never fails a computation. Unset grades count as 0 points, unset
//! credits as 0 credit, and an aggregate with no credits has no GPA (`None`), which
//! is kept distinct from a real 0.0 average.

use crate::core::models::{
    CourseEntry, FinalResult, Semester, SemesterResult, Totals, Transcript, Year, YearResult,
    YEAR_COUNT, YEAR_WEIGHTS,
};

/// Anything that can hand out the current entries of a semester
pub trait EntrySource {
    /// Entries currently recorded for `semester`
    fn entries(&self, semester: Semester) -> &[CourseEntry];
}

impl EntrySource for [Vec<CourseEntry>; 8] {
    fn entries(&self, semester: Semester) -> &[CourseEntry] {
        &self[semester.index()]
    }
}

/// Sum quality points and credits over `entries`.
///
/// Summation order does not matter; the result depends only on the multiset of entries.
pub fn accumulate<'a, I>(entries: I) -> Totals
where
    I: IntoIterator<Item = &'a CourseEntry>,
{
    entries
        .into_iter()
        .fold(Totals::default(), |totals, entry| totals + entry.totals())
}

/// Compute the GPA of one semester.
///
/// `gpa = Σ(points × credit) / Σ credit`, or `None` when the semester has no credits.
#[must_use]
pub fn aggregate(entries: &[CourseEntry]) -> SemesterResult {
    SemesterResult::from_totals(accumulate(entries))
}

/// Compute the GPA of one academic year from the entries of its two semesters.
///
/// The two lists are merged and accumulated at the credit level, so the result equals
/// [`aggregate`] over their concatenation. Semester GPAs are never averaged directly,
/// which would over-weight a light semester.
#[must_use]
pub fn aggregate_year(year: Year, semester_entries: [&[CourseEntry]; 2]) -> YearResult {
    let [first, second] = semester_entries;
    YearResult::from_totals(year, accumulate(first.iter().chain(second)))
}

/// Combine four year results into the weighted final GPA.
///
/// Years without a GPA are left out of both the weighted sum and the weight total, so a
/// partial transcript is averaged over the years that have data. When no year has data
/// the final GPA is `None`.
#[must_use]
pub fn combine(year_results: &[YearResult; YEAR_COUNT], weights: &[f64; YEAR_COUNT]) -> FinalResult {
    let mut weighted_sum = 0.0;
    let mut used_weight = 0.0;

    for (result, weight) in year_results.iter().zip(weights) {
        if let Some(gpa) = result.gpa {
            weighted_sum += gpa * weight;
            used_weight += weight;
        }
    }

    let per_year = std::array::from_fn(|i| YearResult {
        weight: weights[i],
        ..year_results[i]
    });

    FinalResult {
        fgpa: (used_weight > 0.0).then(|| weighted_sum / used_weight),
        used_weight,
        per_year,
    }
}

/// Recompute every semester, every year and the final GPA from `source`.
///
/// Uses the fixed year weights `[0.2, 0.2, 0.3, 0.3]`.
pub fn compute_transcript<S>(source: &S) -> Transcript
where
    S: EntrySource + ?Sized,
{
    let semesters = std::array::from_fn(|i| aggregate(source.entries(Semester::from_index(i))));

    let years: [YearResult; YEAR_COUNT] = std::array::from_fn(|i| {
        let year = Year::from_index(i);
        let [first, second] = year.semesters();
        aggregate_year(year, [source.entries(first), source.entries(second)])
    });

    let final_result = combine(&years, &YEAR_WEIGHTS);
    crate::debug!(
        "Recomputed transcript: fgpa={:?}, used weight {:.1}",
        final_result.fgpa,
        final_result.used_weight
    );

    Transcript {
        semesters,
        final_result,
    }
}
