//! Settings file persistence.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::Settings;
use crate::Result;

/// Environment variable that overrides the preferences path.
pub const CONFIG_ENV: &str = "PASSPAL_CONFIG";

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let mut data = serde_json::to_string(settings)?;
    data.push('\n');
    file.write_all(data.as_bytes())?;

    log::debug!("saved preferences to {}", path.display());
    Ok(())
}

pub fn load(path: &Path) -> Result<Settings> {
    if !path.exists() {
        let settings = Settings::default();
        save(&settings, path)?;
        return Ok(settings);
    }

    let data = fs::read_to_string(path)?;
    if data.trim().is_empty() {
        let settings = Settings::default();
        save(&settings, path)?;
        return Ok(settings);
    }

    let mut settings: Settings = serde_json::from_str(&data)?;
    settings.set_length(settings.length);

    log::debug!("loaded preferences from {}", path.display());
    Ok(settings)
}

pub fn default_path() -> PathBuf {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passpal/preferences.json")
}
