//! Local persistence of entered course rows
//!
//! The snapshot format keeps every field as the raw string the student selected:
//!
//! ```json
//! { "sem1": [{ "course": "Calculus", "grade": "A", "credit": "3" }], "sem2": [], ... }
//! ```
//!
//! An unset grade or credit is stored as `""`. Loading is lenient, so a re-save writes
//! canonical strings: unknown grades and blank or invalid credits become `""`, and
//! credits are rendered as numbers (`"3.0"` becomes `"3"`). Snapshots are written
//! whole and atomically, so a reader never sees a half-written file.

use crate::core::models::entry::{format_credit, parse_credit};
use crate::core::models::grade::parse_grade;
use crate::core::models::{CourseEntry, Semester, SEMESTER_COUNT};
use crate::core::session::Session;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors raised while reading or writing snapshots
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading, writing or removing the snapshot file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The snapshot file exists but is not in the expected format
    #[error("malformed snapshot in {}: {source}", .path.display())]
    Malformed {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// The finished temporary file could not be moved over the snapshot
    #[error("failed to replace {}: {source}", .path.display())]
    Persist {
        /// Destination snapshot file
        path: PathBuf,
        /// Underlying error, still holding the temporary file
        source: tempfile::PersistError,
    },

    /// The snapshot could not be serialised
    #[error("failed to serialise snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One course row as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    /// Course name
    #[serde(default)]
    pub course: String,
    /// Grade symbol, `""` when unset
    #[serde(default)]
    pub grade: String,
    /// Credit value, `""` when unset
    #[serde(default)]
    pub credit: String,
}

impl From<&CourseEntry> for StoredEntry {
    fn from(entry: &CourseEntry) -> Self {
        Self {
            course: entry.course.clone(),
            grade: entry
                .grade
                .map_or_else(String::new, |g| g.symbol().to_string()),
            credit: format_credit(entry.credit),
        }
    }
}

impl From<&StoredEntry> for CourseEntry {
    fn from(stored: &StoredEntry) -> Self {
        let grade = parse_grade(&stored.grade);
        if grade.is_none() && !stored.grade.trim().is_empty() {
            crate::warn!(
                "Ignoring unknown grade '{}' for course '{}'",
                stored.grade,
                stored.course
            );
        }
        Self {
            course: stored.course.clone(),
            grade,
            credit: parse_credit(&stored.credit),
        }
    }
}

/// Whole-session snapshot in the persistence format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SnapshotFile", into = "SnapshotFile")]
pub struct Snapshot {
    semesters: [Vec<StoredEntry>; SEMESTER_COUNT],
}

impl Snapshot {
    /// Capture every row of `session`
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let rows = session.all_entries();
        Self {
            semesters: std::array::from_fn(|i| rows[i].iter().map(StoredEntry::from).collect()),
        }
    }

    /// Rebuild a session from this snapshot.
    ///
    /// Unknown grades and non-numeric credits become "no selection".
    #[must_use]
    pub fn to_session(&self) -> Session {
        Session::from_entries(std::array::from_fn(|i| {
            self.semesters[i].iter().map(CourseEntry::from).collect()
        }))
    }

    /// Stored rows of one semester
    #[must_use]
    pub fn semester(&self, semester: Semester) -> &[StoredEntry] {
        &self.semesters[semester.index()]
    }

    /// Parse a snapshot from JSON text
    ///
    /// # Errors
    /// Returns an error if the text is not a valid snapshot.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialise this snapshot as pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if serialisation fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// On-disk shape of a snapshot, keyed `sem1` to `sem8`
type SnapshotFile = BTreeMap<String, Vec<StoredEntry>>;

impl From<SnapshotFile> for Snapshot {
    fn from(mut file: SnapshotFile) -> Self {
        // Missing semesters load as empty; unknown keys are dropped
        Self {
            semesters: std::array::from_fn(|i| {
                file.remove(&Semester::from_index(i).storage_key())
                    .unwrap_or_default()
            }),
        }
    }
}

impl From<Snapshot> for SnapshotFile {
    fn from(snapshot: Snapshot) -> Self {
        Semester::all()
            .zip(snapshot.semesters)
            .map(|(semester, rows)| (semester.storage_key(), rows))
            .collect()
    }
}

/// Snapshot stored in a single JSON file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path` (the file need not exist yet)
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored snapshot.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid snapshot.
    pub fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };

        Snapshot::from_json(&content)
            .map(Some)
            .map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            })
    }

    /// Load the stored session, or an empty one when nothing has been saved
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_session(&self) -> Result<Session, StorageError> {
        Ok(self
            .load()?
            .map_or_else(Session::new, |snapshot| snapshot.to_session()))
    }

    /// Replace the stored snapshot atomically
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let json = snapshot.to_json()?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|source| self.io_error(source))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|source| self.io_error(source))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.flush())
            .map_err(|source| self.io_error(source))?;
        tmp.persist(&self.path)
            .map_err(|source| StorageError::Persist {
                path: self.path.clone(),
                source,
            })?;

        crate::debug!("Snapshot written to {}", self.path.display());
        Ok(())
    }

    /// Persist the rows of `session`
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be written.
    pub fn save_session(&self, session: &Session) -> Result<(), StorageError> {
        self.save(&Snapshot::from_session(session))
    }

    /// Delete the stored snapshot. Returns `true` if one existed.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<bool, StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
