//! Saved generator preferences.
//!
//! The record holds exactly two fields, the password length and the enabled
//! character classes, stored as JSON.

mod file;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::pass::CharClasses;

pub use file::{CONFIG_ENV, default_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub options: CharClasses,
}

impl Settings {
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 50;

    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH);
    }

    /// Load from the default location, creating the file with defaults if
    /// it does not exist yet.
    pub fn load_from_file() -> Result<Self> {
        Self::load_from(&default_path())
    }

    pub fn save_to_file(&self) -> Result<()> {
        self.save_to(&default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(self, path)
    }

    /// Like [`Settings::load_from_file`], but a missing or unreadable record
    /// only costs a warning.
    pub fn load_or_default() -> Self {
        Self::load_from_file().unwrap_or_else(|e| {
            log::warn!("failed to load preferences: {}", e);
            Self::default()
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 12,
            options: CharClasses::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.length, 12);
        assert!(settings.options.lowercase);
        assert!(settings.options.uppercase);
        assert!(settings.options.numbers);
        assert!(!settings.options.symbols);
    }

    #[test]
    fn set_length_clamps() {
        let mut settings = Settings::default();
        settings.set_length(5);
        assert_eq!(settings.length, Settings::MIN_LENGTH);
        settings.set_length(500);
        assert_eq!(settings.length, Settings::MAX_LENGTH);
        settings.set_length(20);
        assert_eq!(settings.length, 20);
    }

    #[test]
    fn partial_record_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"length":30}"#).unwrap();
        assert_eq!(settings.length, 30);
        assert_eq!(settings.options, CharClasses::default());
    }
}
