//! YAML-level configuration upgrades.
//!
//! Files written by older versions may lack keys added later. `serde(default)`
//! already covers them at load time; these helpers make the file itself
//! explicit again so that `config --edit` shows every knob.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    match yaml {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: top level must be a mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default()).map_err(|_| AppError::ConfigSave)? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::ConfigSave),
    }
}

/// Keys present in the default configuration but missing from the file.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value. Existing values are never
/// overwritten. Returns the keys that were added.
pub fn add_missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;
    let mut added = Vec::new();

    for (k, v) in defaults {
        if current.contains_key(&k) {
            continue;
        }
        if let Some(name) = k.as_str() {
            added.push(name.to_string());
        }
        current.insert(k, v);
    }

    if !added.is_empty() {
        let serialized =
            serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, serialized)?;
    }

    Ok(added)
}
