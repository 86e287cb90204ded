//! Print command handler
//!
//! Renders the results summary as text, Markdown or HTML, to standard output or a file.

use super::{fail, load_session};
use fgpa_calc::config::Config;
use fgpa_calc::core::report::{ReportContext, ReportFormat};
use fgpa_calc::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the print command.
///
/// # Arguments
/// * `format_str` - Output format (text, markdown, html)
/// * `output` - Optional output file; a bare file name is placed in the reports directory
/// * `config` - Configuration with the storage and report settings
pub fn run(format_str: &str, output: Option<&Path>, config: &Config) {
    let format = ReportFormat::from_str(format_str).unwrap_or_else(|e| fail(&e));

    let session = load_session(config);
    let transcript = session.recompute_all();
    let display = config.display_options();
    let ctx = ReportContext::new(&session, &transcript, &display);
    let reporter = format.reporter();

    match output {
        None => match reporter.render(&ctx) {
            Ok(content) => print!("{content}"),
            Err(e) => fail(&format!("Failed to render {format} results: {e}")),
        },
        Some(path) => {
            let path = resolve_output(path, &config.report.reports_dir);
            if let Some(parent) = path.parent() {
                if std::fs::create_dir_all(parent).is_err() {
                    fail(&format!("Failed to create directory: {}", parent.display()));
                }
            }
            if let Err(e) = reporter.generate(&ctx, &path) {
                error!("Print failed for {}: {e}", path.display());
                fail(&format!("Failed to write {}: {e}", path.display()));
            }
            info!("Printed {format} results to {}", path.display());
            println!("✓ Results written: {}", path.display());
        }
    }
}

/// Place bare file names in `reports_dir`; paths with a directory are used as given
fn resolve_output(path: &Path, reports_dir: &str) -> PathBuf {
    let has_dir = path
        .parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty());
    if has_dir || path.is_absolute() || reports_dir.is_empty() {
        path.to_path_buf()
    } else {
        Path::new(reports_dir).join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_output() {
        assert_eq!(
            resolve_output(Path::new("results.html"), "/reports"),
            PathBuf::from("/reports/results.html")
        );
        assert_eq!(
            resolve_output(Path::new("out/results.md"), "/reports"),
            PathBuf::from("out/results.md")
        );
        assert_eq!(
            resolve_output(Path::new("results.txt"), ""),
            PathBuf::from("results.txt")
        );
    }
}
