use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys of the current file format.
pub const KNOWN_KEYS: [&str; 9] = [
    "enabled",
    "work_days",
    "start_time",
    "lunch_start",
    "lunch_end",
    "end_time",
    "interval_minutes",
    "sound_enabled",
    "log_level",
];

/// camelCase names written by the browser version → current names.
const LEGACY_KEYS: [(&str, &str); 8] = [
    ("remindersEnabled", "enabled"),
    ("workDays", "work_days"),
    ("startTime", "start_time"),
    ("lunchStart", "lunch_start"),
    ("lunchEnd", "lunch_end"),
    ("endTime", "end_time"),
    ("reminderInterval", "interval_minutes"),
    ("soundEnabled", "sound_enabled"),
];

/// Runtime-only fields that the browser version persisted along with the
/// settings. They carry no configuration and are dropped.
const RUNTIME_KEYS: [&str; 4] = [
    "nextReminder",
    "checkInterval",
    "lastWorkStartNotification",
    "lastWorkEndNotification",
];

fn key(s: &str) -> Value {
    Value::String(s.to_string())
}

fn legacy_name(current: &str) -> Option<&'static str> {
    LEGACY_KEYS
        .iter()
        .find(|(_, new)| *new == current)
        .map(|(old, _)| *old)
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;

    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Config(format!(
            "{} does not contain a key/value mapping",
            path.display()
        ))),
    }
}

/// Keys absent from the file, counting a legacy alias as present.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;

    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| {
            !map.contains_key(k)
                && !legacy_name(k).is_some_and(|old| map.contains_key(old))
        })
        .collect())
}

/// Bring a config file to the current format:
/// - rename legacy camelCase keys (an existing snake_case key wins),
/// - drop runtime-only browser fields,
/// - add missing keys with their default values.
///
/// Returns the list of actions performed; an empty list means the file was
/// already current and has not been rewritten.
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    let mut map = read_mapping(path)?;
    let mut actions = Vec::new();

    for (old, new) in LEGACY_KEYS {
        if let Some(val) = map.remove(old) {
            if map.contains_key(new) {
                actions.push(format!("Dropped legacy '{}' (already has '{}')", old, new));
            } else {
                map.insert(key(new), val);
                actions.push(format!("Renamed '{}' → '{}'", old, new));
            }
        }
    }

    for k in RUNTIME_KEYS {
        if map.remove(k).is_some() {
            actions.push(format!("Removed runtime field '{}'", k));
        }
    }

    let defaults = match serde_yaml::to_value(super::Config::default())? {
        Value::Mapping(m) => m,
        _ => Mapping::new(),
    };

    for k in KNOWN_KEYS {
        if !map.contains_key(k)
            && let Some(val) = defaults.get(k)
        {
            map.insert(key(k), val.clone());
            actions.push(format!("Added missing '{}'", k));
        }
    }

    if !actions.is_empty() {
        // make sure the migrated mapping is still loadable before writing it
        let migrated: super::Config = serde_yaml::from_value(Value::Mapping(map))?;
        migrated.save_to(path)?;
        log::info!("config migrated: {}", actions.join("; "));
    }

    Ok(actions)
}
