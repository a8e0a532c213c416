// Application settings
// Loaded from ~/.config/gridnote/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use gridnote_engine::cell_key::KeyEncoding;
use gridnote_engine::font::{FontSize, DEFAULT_FONT_SIZE};
use gridnote_engine::spell::{Dictionary, SpellChecker};

const DEFAULT_CONFIG: &str = r#"{
    // Editor
    "editor.fontSize": 14,

    // File handling
    // Cell keys in JSON documents: "rowcol" ("01" = row 0, col 1)
    // or "sequential" ("02" = second cell)
    "file.cellKeys": "rowcol",

    // CSV export header labels; {seq}, {row} and {col} are expanded
    "export.csvHeader": "Cell {seq}",

    // Spelling
    // Extra word list, one word per line with an optional count
    "spell.dictionaryPath": null,
    "spell.maxEditDistance": 2,

    // UI
    "ui.darkMode": false
}
"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Editor
    #[serde(rename = "editor.fontSize")]
    pub font_size: u16,

    // File
    #[serde(rename = "file.cellKeys")]
    pub cell_keys: KeyEncoding,

    // Export
    #[serde(rename = "export.csvHeader")]
    pub csv_header: String,

    // Spelling
    #[serde(rename = "spell.dictionaryPath")]
    pub dictionary_path: Option<PathBuf>,

    #[serde(rename = "spell.maxEditDistance")]
    pub max_edit_distance: u8,

    // UI
    #[serde(rename = "ui.darkMode")]
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            cell_keys: KeyEncoding::RowCol,
            csv_header: "Cell {seq}".to_string(),
            dictionary_path: None,
            max_edit_distance: 2,
            dark_mode: false,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gridnote");
        config_dir.join("settings.json")
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from `path`. A missing file is created with the defaults.
    pub fn load_from(path: &Path) -> Self {
        log::debug!("loading settings from {}", path.display());
        if !path.exists() {
            create_default_file(path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                // Strip comments (lines starting with //)
                let cleaned: String = contents
                    .lines()
                    .filter(|line| !line.trim().starts_with("//"))
                    .collect::<Vec<_>>()
                    .join("\n");

                match serde_json::from_str(&cleaned) {
                    Ok(settings) => settings,
                    Err(e) => {
                        log::warn!("error parsing {}: {e}; using default settings", path.display());
                        Self::default()
                    }
                }
            }
            Err(e) => {
                log::warn!("error reading {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save current settings to disk
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;

        fs::write(path, json).map_err(|e| e.to_string())
    }

    pub fn font_size(&self) -> FontSize {
        FontSize::new(self.font_size)
    }

    /// Built-in dictionary plus the configured word list, if any.
    ///
    /// An unreadable word list is logged and left out.
    pub fn spell_checker(&self) -> SpellChecker {
        let mut dictionary = Dictionary::builtin();
        if let Some(path) = &self.dictionary_path {
            match fs::read_to_string(path) {
                Ok(text) => {
                    let added = dictionary.extend_from_word_list(&text);
                    log::info!("loaded {added} words from {}", path.display());
                }
                Err(e) => log::warn!("error reading word list {}: {e}", path.display()),
            }
        }
        log::debug!("dictionary has {} words", dictionary.len());
        SpellChecker::new(dictionary, self.max_edit_distance)
    }
}

/// Create default settings file with comments
fn create_default_file(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            log::warn!("error creating config directory: {e}");
            return;
        }
    }

    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        log::warn!("error writing default {}: {e}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_writes_commented_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gridnote").join("settings.json");

        let settings = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
        assert!(path.exists());

        // The file we just wrote must parse back to the same defaults
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            "{\n  // bigger text\n  \"editor.fontSize\": 20,\n  \"file.cellKeys\": \"sequential\"\n}\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.font_size, 20);
        assert_eq!(settings.cell_keys, KeyEncoding::Sequential);
        assert_eq!(settings.csv_header, "Cell {seq}");
        assert_eq!(settings.max_edit_distance, 2);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ \"editor.fontSize\": \"huge\" }").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            font_size: 9,
            csv_header: "R{row}C{col}".to_string(),
            dark_mode: true,
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_zero_font_size_clamped() {
        let settings = Settings { font_size: 0, ..Settings::default() };
        assert_eq!(settings.font_size().get(), 1);
    }

    #[test]
    fn test_spell_checker_with_word_list() {
        let dir = tempdir().unwrap();
        let words = dir.path().join("words.txt");
        fs::write(&words, "gridnote\nzyzzyva 3\n").unwrap();

        let settings = Settings {
            dictionary_path: Some(words),
            ..Settings::default()
        };
        let checker = settings.spell_checker();
        assert!(checker.is_known("gridnote"));
        assert!(checker.is_known("the"));

        let missing = Settings {
            dictionary_path: Some(dir.path().join("nope.txt")),
            ..Settings::default()
        };
        assert!(!missing.spell_checker().is_known("gridnote"));
    }
}
