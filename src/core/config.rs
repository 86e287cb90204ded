//! Configuration module for the FGPA calculator

use crate::core::report::{DisplayOptions, DEFAULT_PLACEHOLDER, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the application directory in path values
pub const HOME_VARIABLE: &str = "$FGPA_HOME";

/// Largest accepted number of decimal places
const MAX_PRECISION: usize = 6;

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Where entered data is kept between runs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Working session, rewritten after every edit
    #[serde(default)]
    pub session_file: String,
    /// Snapshot written by `save` and read by `load`
    #[serde(default)]
    pub save_file: String,
}

/// Result display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory for printed report files
    #[serde(default)]
    pub reports_dir: String,
    /// Decimal places shown for GPA values
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Text shown for an undefined GPA
    #[serde(default)]
    pub placeholder: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            reports_dir: String::new(),
            precision: DEFAULT_PRECISION,
            placeholder: String::new(),
        }
    }
}

const fn default_precision() -> usize {
    DEFAULT_PRECISION
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override working session file
    pub session_file: Option<String>,
    /// Override snapshot file
    pub save_file: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override GPA decimal places
    pub precision: Option<usize>,
}

impl Config {
    /// Get the `$FGPA_HOME` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/fgpa`
    /// - macOS: `~/Library/Application Support/fgpa`
    /// - Windows: `%APPDATA%\fgpa`
    #[must_use]
    pub fn get_fgpa_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fgpa")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Fills string fields that are empty here but set in `defaults`, so upgrading
    /// the application picks up newly added settings without losing user values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        for (value, default) in [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.storage.session_file, &defaults.storage.session_file),
            (&mut self.storage.save_file, &defaults.storage.save_file),
            (&mut self.report.reports_dir, &defaults.report.reports_dir),
            (&mut self.report.placeholder, &defaults.report.placeholder),
        ] {
            if value.is_empty() && !default.is_empty() {
                value.clone_from(default);
                changed = true;
            }
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values, and only for this run; the
    /// configuration file is not modified.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(session_file) = &overrides.session_file {
            self.storage.session_file.clone_from(session_file);
        }
        if let Some(save_file) = &overrides.save_file {
            self.storage.save_file.clone_from(save_file);
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.report.reports_dir.clone_from(reports_dir);
        }
        if let Some(precision) = overrides.precision {
            self.report.precision = precision.min(MAX_PRECISION);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_fgpa_dir`](Self::get_fgpa_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_fgpa_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$FGPA_HOME` in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(HOME_VARIABLE) {
            let home = Self::get_fgpa_dir();
            value.replace(HOME_VARIABLE, home.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$FGPA_HOME` is expanded in
    /// every path value.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.storage.session_file = Self::expand_variables(&config.storage.session_file);
        config.storage.save_file = Self::expand_variables(&config.storage.save_file);
        config.report.reports_dir = Self::expand_variables(&config.report.reports_dir);
        config.report.precision = config.report.precision.min(MAX_PRECISION);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// The defaults differ between debug and release builds:
    /// - Debug: Uses `DefaultCLIConfigDebug.toml`
    /// - Release: Uses `DefaultCLIConfigRelease.toml`
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).unwrap_or_else(|e| {
            crate::error!("Compiled-in default configuration is invalid: {e}");
            Self::default()
        })
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from defaults and
    ///   saves the result when anything was added
    /// - On first run: creates the config directory and writes the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
            crate::warn!(
                "Could not read {}; using default configuration",
                config_file.display()
            );
        } else {
            // First run
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the config directory
    /// cannot be created or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to `path`, creating its directory if needed
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Number formatting derived from the `[report]` section
    #[must_use]
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            precision: self.report.precision,
            placeholder: if self.report.placeholder.is_empty() {
                DEFAULT_PLACEHOLDER.to_string()
            } else {
                self.report.placeholder.clone()
            },
        }
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`, `file`, `verbose`
    /// - `session_file`, `save_file`
    /// - `reports_dir`, `precision`, `placeholder`
    ///
    /// Dashed spellings (`save-file`) are accepted as well.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "session_file" | "session-file" => Some(self.storage.session_file.clone()),
            "save_file" | "save-file" => Some(self.storage.save_file.clone()),
            "reports_dir" | "reports-dir" => Some(self.report.reports_dir.clone()),
            "precision" => Some(self.report.precision.to_string()),
            "placeholder" => Some(self.report.placeholder.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be parsed
    /// (e.g. "maybe" for `verbose`, or a `precision` above 6).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                let level: crate::logger::Level = value
                    .parse()
                    .map_err(|_| format!("Invalid log level: '{value}'"))?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "session_file" | "session-file" => self.storage.session_file = value.to_string(),
            "save_file" | "save-file" => self.storage.save_file = value.to_string(),
            "reports_dir" | "reports-dir" => self.report.reports_dir = value.to_string(),
            "precision" => {
                self.report.precision = value
                    .parse::<usize>()
                    .ok()
                    .filter(|p| *p <= MAX_PRECISION)
                    .ok_or_else(|| {
                        format!("Invalid precision: '{value}' (expected 0-{MAX_PRECISION})")
                    })?;
            }
            "placeholder" => self.report.placeholder = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "session_file" | "session-file" => self
                .storage
                .session_file
                .clone_from(&defaults.storage.session_file),
            "save_file" | "save-file" => self
                .storage
                .save_file
                .clone_from(&defaults.storage.save_file),
            "reports_dir" | "reports-dir" => self
                .report
                .reports_dir
                .clone_from(&defaults.report.reports_dir),
            "precision" => self.report.precision = defaults.report.precision,
            "placeholder" => self
                .report
                .placeholder
                .clone_from(&defaults.report.placeholder),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load) recreates
    /// it. Succeeds when no file exists.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[storage]")?;
        writeln!(f, "  session_file = \"{}\"", self.storage.session_file)?;
        writeln!(f, "  save_file = \"{}\"", self.storage.save_file)?;

        writeln!(f, "\n[report]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.report.reports_dir)?;
        writeln!(f, "  precision = {}", self.report.precision)?;
        writeln!(f, "  placeholder = \"{}\"", self.report.placeholder)?;

        Ok(())
    }
}
