use crate::errors::{AppError, AppResult};
use crate::models::{Configuration, WorkDays};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_hhmm;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

const HEADER: &str = "# rStandup configuration\n\
                      # work_days: 0=Sunday .. 6=Saturday\n\
                      # times are HH:MM, interval_minutes must be > 0\n";

/// Settings as stored on disk.
///
/// Field aliases accept the camelCase names used by the browser version of
/// the app, so its exported settings can be loaded as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_true", alias = "remindersEnabled")]
    pub enabled: bool,
    #[serde(default = "default_work_days", alias = "workDays")]
    pub work_days: Vec<u8>,
    #[serde(default = "default_start_time", alias = "startTime")]
    pub start_time: String,
    #[serde(default = "default_lunch_start", alias = "lunchStart")]
    pub lunch_start: String,
    #[serde(default = "default_lunch_end", alias = "lunchEnd")]
    pub lunch_end: String,
    #[serde(default = "default_end_time", alias = "endTime")]
    pub end_time: String,
    #[serde(default = "default_interval", alias = "reminderInterval")]
    pub interval_minutes: u32,
    #[serde(default = "default_true", alias = "soundEnabled")]
    pub sound_enabled: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_true() -> bool {
    true
}
fn default_work_days() -> Vec<u8> {
    vec![1, 2, 3, 4, 5]
}
fn default_start_time() -> String {
    "09:00".to_string()
}
fn default_lunch_start() -> String {
    "11:30".to_string()
}
fn default_lunch_end() -> String {
    "13:30".to_string()
}
fn default_end_time() -> String {
    "17:30".to_string()
}
fn default_interval() -> u32 {
    120
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            work_days: default_work_days(),
            start_time: default_start_time(),
            lunch_start: default_lunch_start(),
            lunch_end: default_lunch_end(),
            end_time: default_end_time(),
            interval_minutes: default_interval(),
            sound_enabled: default_true(),
            log_level: default_log_level(),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(AppError::Config(format!(
            "'{}' expects a boolean, got '{}'",
            key, other
        ))),
    }
}

fn parse_work_days(value: &str) -> AppResult<Vec<u8>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u8>()
                .map_err(|_| AppError::Config(format!("invalid work day '{}'", s)))
        })
        .collect()
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rstandup")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rstandup")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rstandup.conf")
    }

    /// `--config` override if given, else the platform default.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom.map(expand_tilde).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Validate and write the settings. Invalid settings are refused and the
    /// file keeps its previous content.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        self.schedule()?;

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, format!("{}{}", HEADER, yaml))
            .map_err(|_| AppError::ConfigSave(path.display().to_string()))?;

        log::info!("configuration saved to {}", path.display());
        Ok(())
    }

    /// Create the config directory and a default file. An existing file is
    /// left alone. Returns true when a new file was written.
    pub fn init_all(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }

        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Build the engine configuration, rejecting malformed values.
    pub fn schedule(&self) -> AppResult<Configuration> {
        let time = |key: &str, value: &str| {
            parse_hhmm(value).map_err(|_| {
                AppError::InvalidConfiguration(format!("{}: '{}' is not HH:MM", key, value))
            })
        };

        Configuration::new(
            self.enabled,
            WorkDays::from_indices(self.work_days.iter().copied())?,
            time("start_time", &self.start_time)?,
            time("lunch_start", &self.lunch_start)?,
            time("lunch_end", &self.lunch_end)?,
            time("end_time", &self.end_time)?,
            self.interval_minutes,
        )
    }

    /// Update a single key from its textual value. Both snake_case and the
    /// legacy camelCase names are accepted.
    pub fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let value = value.trim();
        match key.trim() {
            "enabled" | "remindersEnabled" => self.enabled = parse_bool(key, value)?,
            "work_days" | "workDays" => self.work_days = parse_work_days(value)?,
            "start_time" | "startTime" => self.start_time = value.to_string(),
            "lunch_start" | "lunchStart" => self.lunch_start = value.to_string(),
            "lunch_end" | "lunchEnd" => self.lunch_end = value.to_string(),
            "end_time" | "endTime" => self.end_time = value.to_string(),
            "interval_minutes" | "reminderInterval" => {
                self.interval_minutes = value.parse().map_err(|_| {
                    AppError::Config(format!("'{}' expects minutes, got '{}'", key, value))
                })?
            }
            "sound_enabled" | "soundEnabled" => self.sound_enabled = parse_bool(key, value)?,
            "log_level" => self.log_level = value.to_string(),
            other => return Err(AppError::Config(format!("unknown key '{}'", other))),
        }
        Ok(())
    }

    /// Apply `KEY=VALUE` assignments on a copy and return it once the result
    /// validates. `self` is never modified.
    pub fn with_assignments(&self, assignments: &[String]) -> AppResult<Self> {
        let mut updated = self.clone();
        for a in assignments {
            let (key, value) = a
                .split_once('=')
                .ok_or_else(|| AppError::Config(format!("expected KEY=VALUE, got '{}'", a)))?;
            updated.set(key, value)?;
        }
        updated.schedule()?;
        Ok(updated)
    }
}
