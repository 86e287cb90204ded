//! Command-line interface entry point for `fgpa`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use fgpa_calc::config::Config;
use fgpa_calc::info;
use fgpa_calc::logger::{
    enable_debug, enable_verbose, init_file_logging, level, set_level, set_level_from_str, Level,
};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    init_logging(&args, &config);

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Course { action } => commands::course::run(action, &config),
        Command::Semester { semester } => commands::semester::run(semester, &config),
        Command::Calc => commands::calc::run(&config),
        Command::Print { format, output } => {
            commands::print::run(&format, output.as_deref(), &config);
        }
        Command::Save => commands::snapshot::save(&config),
        Command::Load => commands::snapshot::load(&config),
        Command::Clear { yes } => commands::snapshot::clear(yes, &config),
    }
}

/// Configure the logger from the effective configuration
fn init_logging(args: &Cli, config: &Config) {
    // --log-level has already replaced the config level; fall back to warn
    if !set_level_from_str(&config.logging.level) {
        set_level(Level::Warn);
    }
    if args.debug_flag || level() == Level::Debug {
        set_level(Level::Debug);
        enable_debug();
    }

    let verbose = config.logging.verbose;
    if verbose {
        enable_verbose();
    }

    if config.logging.file.is_empty() {
        return;
    }
    let log_path = std::path::PathBuf::from(&config.logging.file);
    let display_path = log_path.to_string_lossy();
    if init_file_logging(&log_path) {
        if verbose {
            eprintln!("✓ File logging initialized at: {display_path}");
        } else {
            info!("File logging initialized at: {display_path}");
        }
    } else {
        eprintln!("✗ Failed to initialize file logging at: {display_path}");
    }
}
