//! Shared settings file.
//!
//! The CLI and any other frontend read `~/.config/nookdex/settings.toml`
//! through these functions so data-directory resolution is the same
//! everywhere.

use std::io;
use std::path::{Path, PathBuf};

use nookdex_core::DEFAULT_CDN_HOST;
use nookdex_data::{DataFiles, Locale, NormalizeOptions};
use nookdex_query::SortKey;
use serde::{Deserialize, Serialize};

use crate::error::RepositoryError;

/// Fallback data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Keys accepted by [`Settings::set`].
pub const SETTING_KEYS: &[&str] = &[
    "data.dir",
    "data.items_file",
    "data.translations_file",
    "data.catalog_file",
    "data.creatures_file",
    "data.npcs_file",
    "display.locale",
    "display.cdn_host",
    "display.default_sort",
    "display.page_size",
];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_items_file")]
    pub items_file: String,
    #[serde(default = "default_translations_file")]
    pub translations_file: String,
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,
    #[serde(default = "default_creatures_file")]
    pub creatures_file: String,
    #[serde(default = "default_npcs_file")]
    pub npcs_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Translation field used for names, e.g. `cNzh` or `uSen`.
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_cdn_host")]
    pub cdn_host: String,
    #[serde(default = "default_sort")]
    pub default_sort: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_items_file() -> String {
    DataFiles::default().items
}

fn default_translations_file() -> String {
    DataFiles::default().translations
}

fn default_catalog_file() -> String {
    DataFiles::default().catalog
}

fn default_creatures_file() -> String {
    DataFiles::default().creatures
}

fn default_npcs_file() -> String {
    DataFiles::default().npcs
}

fn default_locale() -> String {
    Locale::default().code().to_string()
}

fn default_cdn_host() -> String {
    DEFAULT_CDN_HOST.to_string()
}

fn default_sort() -> String {
    "id-asc".to_string()
}

fn default_page_size() -> usize {
    100
}

impl Default for DataSettings {
    fn default() -> Self {
        let files = DataFiles::default();
        Self {
            dir: None,
            items_file: files.items,
            translations_file: files.translations,
            catalog_file: files.catalog,
            creatures_file: files.creatures,
            npcs_file: files.npcs,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            cdn_host: default_cdn_host(),
            default_sort: default_sort(),
            page_size: default_page_size(),
        }
    }
}

impl Settings {
    pub fn data_files(&self) -> DataFiles {
        DataFiles {
            items: self.data.items_file.clone(),
            translations: self.data.translations_file.clone(),
            catalog: self.data.catalog_file.clone(),
            creatures: self.data.creatures_file.clone(),
            npcs: self.data.npcs_file.clone(),
        }
    }

    /// The configured locale, or the default when the value is not recognized.
    pub fn locale(&self) -> Locale {
        self.display.locale.parse().unwrap_or_else(|e| {
            log::warn!("{}; using {}", e, Locale::default());
            Locale::default()
        })
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        let host = self.display.cdn_host.trim();
        NormalizeOptions {
            locale: self.locale(),
            cdn_host: (!host.is_empty()).then(|| host.to_string()),
        }
    }

    /// Set one value by its dotted key, e.g. `display.locale`.
    ///
    /// Values are validated; an empty `data.dir` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let value = value.trim();
        let file_name = || -> Result<String, RepositoryError> {
            if value.is_empty() {
                return Err(RepositoryError::settings(format!("{} cannot be empty", key)));
            }
            Ok(value.to_string())
        };
        match key {
            "data.dir" => {
                self.data.dir = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "data.items_file" => self.data.items_file = file_name()?,
            "data.translations_file" => self.data.translations_file = file_name()?,
            "data.catalog_file" => self.data.catalog_file = file_name()?,
            "data.creatures_file" => self.data.creatures_file = file_name()?,
            "data.npcs_file" => self.data.npcs_file = file_name()?,
            "display.locale" => {
                let locale: Locale = value
                    .parse()
                    .map_err(|e| RepositoryError::settings(format!("{}", e)))?;
                self.display.locale = locale.code().to_string();
            }
            "display.cdn_host" => self.display.cdn_host = value.to_string(),
            "display.default_sort" => {
                let sort: SortKey = value
                    .parse()
                    .map_err(|e| RepositoryError::settings(format!("{}", e)))?;
                self.display.default_sort = sort.as_str().to_string();
            }
            "display.page_size" => {
                self.display.page_size = value.parse().map_err(|_| {
                    RepositoryError::settings(format!("page_size must be a number, got '{}'", value))
                })?;
            }
            _ => {
                return Err(RepositoryError::settings(format!(
                    "unknown key '{}' (expected one of: {})",
                    key,
                    SETTING_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Data directory using the priority chain:
    ///
    /// 1. CLI override (if `Some`)
    /// 2. `data.dir` in the settings file
    /// 3. `./data`
    pub fn resolve_data_dir(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.data.dir.clone().filter(|d| !d.as_os_str().is_empty()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }
}

/// Canonical path to the settings file: `~/.config/nookdex/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("nookdex").join("settings.toml")
}

/// Load settings from the canonical path, returning defaults if missing or corrupt.
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, returning defaults if missing or corrupt.
pub fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            Settings::default()
        }),
        Err(_) => {
            log::debug!("No settings at {}, using defaults", path.display());
            Settings::default()
        }
    }
}

/// Save settings atomically (write to temp, then rename).
pub fn save_settings_to(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

pub fn save_settings(settings: &Settings) -> io::Result<()> {
    save_settings_to(&settings_path(), settings)
}

/// Effective settings as pretty-printed TOML, for display.
pub fn settings_to_string(settings: &Settings) -> Option<String> {
    toml::to_string_pretty(settings).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
