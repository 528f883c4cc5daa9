use crate::theme::ThemeName;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Preferences kept between sessions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Last selected theme
    #[serde(default)]
    pub theme: ThemeName,
    /// Last word list laid out
    #[serde(default)]
    pub words: Vec<String>,
    /// File backing these settings; unset settings are never written
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Settings {
    /// Get the save file path
    fn save_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("crossword_settings.json")
    }

    /// Load settings from the default location
    pub fn load() -> Self {
        Self::load_from(Self::save_path())
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: PathBuf) -> Self {
        let mut settings: Self = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!("ignoring unreadable settings {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        settings.path = Some(path);
        settings
    }

    /// Save settings to their file
    pub fn save(&self) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }

    /// Save, logging rather than failing
    pub fn save_or_warn(&self) {
        if let Err(e) = self.save() {
            warn!("could not save settings: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("crossword-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn test_unbacked_settings_do_not_write() {
        let settings = Settings::default();
        assert!(settings.save().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let mut settings = Settings::load_from(path.clone());
        settings.theme = ThemeName::Light;
        settings.words = vec!["seat".to_string(), "tea".to_string()];
        settings.save().unwrap();

        let loaded = Settings::load_from(path.clone());
        assert_eq!(loaded.theme, ThemeName::Light);
        assert_eq!(loaded.words, vec!["seat", "tea"]);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ not json").unwrap();
        let loaded = Settings::load_from(path.clone());
        assert_eq!(loaded.theme, ThemeName::Dark);
        assert!(loaded.words.is_empty());
        let _ = fs::remove_file(path);
    }
}
