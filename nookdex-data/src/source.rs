//! Where raw datasets come from.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::catalog::{CatalogFile, OwnedSet};
use crate::error::SourceError;
use crate::names::Translations;
use crate::raw::{RawCreature, RawItem, RawNpc};

/// Supplies raw datasets to the repository.
///
/// Only `load_items` is essential. Callers treat failures of the other
/// loads as "dataset unavailable" and carry on.
pub trait DataSource {
    fn load_items(&self) -> Result<Vec<RawItem>, SourceError>;

    fn load_owned(&self) -> Result<OwnedSet, SourceError>;

    fn load_translations(&self) -> Result<Translations, SourceError>;

    fn load_creatures(&self) -> Result<Vec<RawCreature>, SourceError> {
        Err(SourceError::missing("creatures"))
    }

    fn load_npcs(&self) -> Result<Vec<RawNpc>, SourceError> {
        Err(SourceError::missing("npcs"))
    }
}

/// File names inside a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub items: String,
    pub translations: String,
    pub catalog: String,
    pub creatures: String,
    pub npcs: String,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            items: "acnh-items.json".to_string(),
            translations: "translations.json".to_string(),
            catalog: "catalog_items.json".to_string(),
            creatures: "acnh-creatures.json".to_string(),
            npcs: "acnh-npcs.json".to_string(),
        }
    }
}

/// Reads every dataset from JSON files in one directory.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
    files: DataFiles,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_files(dir, DataFiles::default())
    }

    pub fn with_files(dir: impl Into<PathBuf>, files: DataFiles) -> Self {
        Self {
            dir: dir.into(),
            files,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn files(&self) -> &DataFiles {
        &self.files
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl DataSource for JsonDirSource {
    fn load_items(&self) -> Result<Vec<RawItem>, SourceError> {
        read_records(&self.path(&self.files.items))
    }

    fn load_owned(&self) -> Result<OwnedSet, SourceError> {
        let file: CatalogFile = read_json(&self.path(&self.files.catalog))?;
        Ok(file.owned_set())
    }

    fn load_translations(&self) -> Result<Translations, SourceError> {
        read_json(&self.path(&self.files.translations))
    }

    fn load_creatures(&self) -> Result<Vec<RawCreature>, SourceError> {
        read_records(&self.path(&self.files.creatures))
    }

    fn load_npcs(&self) -> Result<Vec<RawNpc>, SourceError> {
        read_records(&self.path(&self.files.npcs))
    }
}

/// Read a catalog export from an arbitrary path.
pub fn read_catalog_file(path: &Path) -> Result<CatalogFile, SourceError> {
    read_json(path)
}

fn read_text(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|e| SourceError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Read and deserialize a whole JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|e| SourceError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Read a JSON array of records.
///
/// Elements that are not objects are skipped with a warning; fields inside
/// an object degrade on their own (see [`crate::raw`]).
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SourceError> {
    let value: serde_json::Value = read_json(path)?;
    let serde_json::Value::Array(elements) = value else {
        return Err(SourceError::shape(
            path.display().to_string(),
            "expected a JSON array of records",
        ));
    };

    let total = elements.len();
    let records: Vec<T> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping record {} in {}: {}", index, path.display(), e);
                None
            }
        })
        .collect();

    log::debug!(
        "Read {} of {} records from {}",
        records.len(),
        total,
        path.display()
    );
    Ok(records)
}
