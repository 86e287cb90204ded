//! CLI command handlers for `fgpa`.
//!
//! Each command is implemented in its own submodule. Commands that edit rows load
//! the working session, apply the edit, and write the session back.

pub mod calc;
pub mod config;
pub mod course;
pub mod print;
pub mod semester;
pub mod snapshot;

use fgpa_calc::config::Config;
use fgpa_calc::core::session::Session;
use fgpa_calc::core::storage::FileStore;
use fgpa_calc::{error, info};
use std::io::{self, Write};

/// Print a failure line, log it and exit with status 1
pub fn fail(message: &str) -> ! {
    error!("{message}");
    eprintln!("✗ {message}");
    std::process::exit(1);
}

/// Store holding the working session between invocations
pub fn session_store(config: &Config) -> FileStore {
    FileStore::new(&config.storage.session_file)
}

/// Store holding the explicit save/load snapshot
pub fn snapshot_store(config: &Config) -> FileStore {
    FileStore::new(&config.storage.save_file)
}

/// Load the working session.
///
/// On first run there is no session file yet and every semester starts with one
/// blank row. A session file that cannot be read aborts the command so it is never
/// overwritten.
pub fn load_session(config: &Config) -> Session {
    let store = session_store(config);
    match store.load() {
        Ok(Some(snapshot)) => snapshot.to_session(),
        Ok(None) => {
            info!("No working session at {}; starting fresh", store.path().display());
            Session::with_starter_rows()
        }
        Err(e) => fail(&format!("Failed to read working session: {e}")),
    }
}

/// Write the working session back to disk
pub fn store_session(config: &Config, session: &Session) {
    if let Err(e) = session_store(config).save_session(session) {
        fail(&format!("Failed to write working session: {e}"));
    }
}

/// Ask a yes/no question on the terminal; anything but `y`/`yes` is a no
pub fn confirm(question: &str) -> bool {
    print!("{question} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}
