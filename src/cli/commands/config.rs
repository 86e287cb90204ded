//! `fgpa config` handlers

use super::{confirm, fail};
use crate::args::ConfigSubcommand;
use fgpa_calc::config::Config;
use std::path::Path;

/// Dispatch config subcommands; no subcommand prints the whole configuration
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => show(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => match config.get(&key) {
            Some(value) => println!("{value}"),
            None => fail(&format!("Unknown config key: '{key}'")),
        },
        Some(ConfigSubcommand::Set { key, value }) => {
            let message = format!("Set {key} = {value}");
            edit_and_save(config, &Config::get_config_file_path(), &message, |c| {
                c.set(&key, &value)
            });
        }
        Some(ConfigSubcommand::Unset { key }) => {
            let message = format!("Reset {key} to default");
            edit_and_save(config, &Config::get_config_file_path(), &message, |c| {
                c.unset(&key, defaults)
            });
        }
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn show(config: &Config) {
    println!("\n=== Configuration ===\n");
    print!("{config}");
}

/// Apply one edit, write the config to `path` and report `message`
fn edit_and_save<F>(config: &mut Config, path: &Path, message: &str, edit: F)
where
    F: FnOnce(&mut Config) -> Result<(), String>,
{
    if let Err(e) = edit(config) {
        fail(&e);
    }
    if let Err(e) = config.save_to(path) {
        fail(&format!("Failed to save config: {e}"));
    }
    println!("✓ {message}");
}

fn reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    if !confirm("Reset config to defaults?") {
        println!("✗ Reset cancelled");
        return;
    }
    match Config::reset() {
        Ok(()) => println!("✓ Config reset to defaults"),
        Err(e) => fail(&format!("Failed to remove config file: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_edit_and_save_writes_the_edited_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::from_defaults();

        edit_and_save(&mut config, &path, "Set precision = 3", |c| c.set("precision", "3"));
        edit_and_save(&mut config, &path, "Set placeholder = n/a", |c| {
            c.set("placeholder", "n/a")
        });

        let saved = Config::from_toml(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.report.precision, 3);
        assert_eq!(saved.report.placeholder, "n/a");
        assert_eq!(saved.logging.level, config.logging.level);
    }

    #[test]
    fn test_unset_through_edit_and_save_restores_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let defaults = Config::from_defaults();
        let mut config = Config::from_defaults();
        config.set("precision", "5").unwrap();

        edit_and_save(&mut config, &path, "Reset precision to default", |c| {
            c.unset("precision", &defaults)
        });

        let saved = Config::from_toml(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.report.precision, defaults.report.precision);
    }
}
