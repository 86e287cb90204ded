//! Integration tests for editing a session and persisting it

use fgpa_calc::core::gpa::EntrySource;
use fgpa_calc::core::models::{CourseEntry, EntryUpdate, GradePoint, Semester};
use fgpa_calc::core::session::Session;
use fgpa_calc::core::storage::{FileStore, Snapshot};
use tempfile::TempDir;

fn sem(n: u8) -> Semester {
    Semester::new(n).expect("valid semester")
}

/// A session with rows in every year, including incomplete rows
fn sample_session() -> Session {
    let mut session = Session::new();
    session.add_entry(sem(1), CourseEntry::new("Calculus I", GradePoint::A, 3.0));
    session.add_entry(sem(1), CourseEntry::new("Chemistry", GradePoint::BPlus, 4.0));
    session.add_entry(sem(2), CourseEntry::new("Physics", GradePoint::E, 3.0));
    session.add_entry(sem(4), CourseEntry::blank());
    session.add_entry(sem(5), CourseEntry::new("Databases", GradePoint::AMinus, 4.0));

    let row = session.add_entry(sem(7), CourseEntry::blank());
    session
        .on_entry_changed(
            sem(7),
            row,
            &EntryUpdate {
                course: Some("Thesis".to_string()),
                grade: Some(Some(GradePoint::B)),
                credit: Some(None),
            },
        )
        .expect("row exists");
    session.add_entry(sem(8), CourseEntry::new("Seminar", GradePoint::CPlus, 2.0));
    session
}

#[test]
fn test_save_then_load_reproduces_every_semester() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path().join("saved.json"));
    let session = sample_session();

    store.save_session(&session).expect("save");
    let loaded = store.load_session().expect("load");

    assert_eq!(loaded, session);
    for semester in Semester::all() {
        assert_eq!(loaded.entries(semester), session.entries(semester));
    }
    assert_eq!(loaded.recompute_all(), session.recompute_all());
}

#[test]
fn test_saved_strings_match_what_was_selected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path().join("saved.json"));
    store.save_session(&sample_session()).expect("save");

    let snapshot = store.load().expect("load").expect("snapshot exists");
    let sem1 = snapshot.semester(sem(1));
    assert_eq!(sem1[1].course, "Chemistry");
    assert_eq!(sem1[1].grade, "B+");
    assert_eq!(sem1[1].credit, "4");

    let sem7 = snapshot.semester(sem(7));
    assert_eq!(sem7[0].grade, "B");
    assert_eq!(sem7[0].credit, "");
    assert!(snapshot.semester(sem(3)).is_empty());
}

#[test]
fn test_hand_written_snapshot_is_read_leniently() {
    let json = r#"{
        "sem1": [
            { "course": "Algebra", "grade": "A-", "credit": "3" },
            { "course": "Drawing", "grade": "Z", "credit": "lots" },
            { "course": "Lab", "grade": "B", "credit": " " }
        ],
        "sem6": [ { "grade": "C" } ]
    }"#;

    let session = Snapshot::from_json(json).expect("parse").to_session();
    let rows = session.entries(sem(1));
    assert_eq!(rows[0], CourseEntry::new("Algebra", GradePoint::AMinus, 3.0));
    assert_eq!(rows[1].grade, None);
    assert_eq!(rows[1].credit, None);
    assert_eq!(rows[2].credit, None);
    assert_eq!(session.entries(sem(6))[0].grade, Some(GradePoint::C));
    assert!(session.entries(sem(2)).is_empty());

    // Only the algebra row carries credit: 3.7
    let gpa = session.semester_result(sem(1)).gpa.expect("defined");
    assert!((gpa - 3.7).abs() < 1e-9);
}

#[test]
fn test_clear_all_then_save_leaves_empty_semesters() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path().join("nested").join("saved.json"));

    let mut session = sample_session();
    session.clear_all();
    store.save_session(&session).expect("save");

    let loaded = store.load_session().expect("load");
    assert!(loaded.is_empty());
    assert_eq!(loaded.recompute_all().fgpa(), None);

    assert!(store.clear().expect("clear"));
    assert!(store.load().expect("load").is_none());
}

#[test]
fn test_fgpa_renormalises_over_years_with_credits() {
    let mut session = Session::new();
    session.add_entry(sem(1), CourseEntry::new("Statics", GradePoint::B, 3.0));
    session.add_entry(sem(5), CourseEntry::new("Networks", GradePoint::A, 1.0));
    session.add_entry(sem(6), CourseEntry::new("Compilers", GradePoint::B, 1.0));
    session.add_entry(sem(8), CourseEntry::new("Capstone", GradePoint::APlus, 2.0));

    let transcript = session.recompute_all();
    let years = transcript.years();
    assert_eq!(years[1].gpa, None);
    assert!((years[2].gpa.expect("year 3 defined") - 3.5).abs() < 1e-9);

    // (3.0*0.2 + 3.5*0.3 + 4.0*0.3) / (0.2 + 0.3 + 0.3)
    let fgpa = transcript.fgpa().expect("defined");
    assert!((fgpa - 3.5625).abs() < 1e-9, "got {fgpa}");
}
