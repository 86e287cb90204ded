//! Save, load and clear handlers
//!
//! The working session and the saved snapshot are separate files: `save` copies the
//! working session into the snapshot, `load` copies it back.

use super::{confirm, fail, load_session, session_store, snapshot_store, store_session};
use fgpa_calc::config::Config;
use fgpa_calc::core::gpa::EntrySource;
use fgpa_calc::core::models::Semester;
use fgpa_calc::core::session::Session;
use fgpa_calc::{info, warn};

/// Write every semester to the snapshot file
pub fn save(config: &Config) {
    let session = load_session(config);
    let store = snapshot_store(config);

    if let Err(e) = store.save_session(&session) {
        fail(&format!("Failed to save: {e}"));
    }

    info!("Saved {} rows to {}", session.row_count(), store.path().display());
    println!("✓ Saved locally ({} rows)", session.row_count());
}

/// Replace the working session with the saved snapshot
pub fn load(config: &Config) {
    let store = snapshot_store(config);

    match store.load() {
        Ok(Some(snapshot)) => {
            let session = snapshot.to_session();
            store_session(config, &session);
            let display = config.display_options();
            println!("✓ Loaded saved data ({} rows)", session.row_count());
            let transcript = session.recompute_all();
            for semester in Semester::all().filter(|s| !session.entries(*s).is_empty()) {
                println!(
                    "  {semester}: {}",
                    display.semester_line(transcript.semester(semester).gpa)
                );
            }
        }
        Ok(None) => println!("No saved data found."),
        // The working session is left untouched
        Err(e) => fail(&format!("Failed to load saved data: {e}")),
    }
}

/// Remove every row and the saved snapshot
pub fn clear(yes: bool, config: &Config) {
    if !yes && !confirm("Clear all semesters? This will remove all entered course rows.") {
        println!("✗ Clear cancelled");
        return;
    }

    let mut session = session_store(config).load_session().unwrap_or_else(|e| {
        warn!("Discarding unreadable working session: {e}");
        Session::new()
    });
    session.clear_all();
    store_session(config, &session);

    match snapshot_store(config).clear() {
        Ok(removed) => info!("Saved snapshot removed: {removed}"),
        Err(e) => fail(&format!("Failed to remove saved data: {e}")),
    }

    println!("✓ All semesters cleared");
    println!("{}", config.display_options().fgpa_line(None));
}
