//! Full recompute handler

use super::load_session;
use fgpa_calc::config::Config;
use fgpa_calc::core::models::Semester;
use fgpa_calc::core::report::ReportContext;
use fgpa_calc::verbose;

/// Recompute every semester and year, then print the year lines and the FGPA
pub fn run(config: &Config) {
    let session = load_session(config);
    let transcript = session.recompute_all();
    let display = config.display_options();
    let ctx = ReportContext::new(&session, &transcript, &display);

    for semester in Semester::all() {
        verbose!("{semester}: {}", display.gpa(transcript.semester(semester).gpa));
    }

    for line in ctx.year_lines() {
        println!("{line}");
    }
    println!();
    println!("{}", ctx.fgpa_line());
}
