//! The user's catalog export: which items they already own.

use std::collections::HashSet;

use serde::Deserialize;

/// Identifier of a catalog entry. Exports write it as a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CatalogId {
    Number(u64),
    Text(String),
}

impl CatalogId {
    /// The id as the string key used for owned-set membership.
    pub fn as_key(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
        }
    }

    /// The id as an item id, when it is numeric.
    pub fn as_item_id(&self) -> Option<u32> {
        match self {
            Self::Number(n) => u32::try_from(*n).ok(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One row of a catalog export.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub unique_id: Option<CatalogId>,
}

/// Contents of `catalog_items.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub items: Vec<CatalogEntry>,
}

impl CatalogFile {
    pub fn owned_set(&self) -> OwnedSet {
        let mut owned = OwnedSet::default();
        for entry in &self.items {
            if !entry.label.is_empty() {
                owned.names.insert(entry.label.clone());
            }
            if let Some(id) = &entry.unique_id {
                owned.ids.insert(id.as_key());
            }
        }
        owned
    }

    pub fn import(&self) -> CatalogImport {
        CatalogImport::from_entries(&self.items)
    }
}

/// Owned identifiers used during normalization.
///
/// An item is owned when its display name is in `names`, or its internal
/// id or unique entry id (as strings) is in `ids`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedSet {
    pub names: HashSet<String>,
    pub ids: HashSet<String>,
}

impl OwnedSet {
    pub fn from_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Self {
            names: HashSet::new(),
            ids: ids.into_iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.ids.is_empty()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        !name.is_empty() && self.names.contains(name)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        !id.is_empty() && self.ids.contains(id)
    }
}

/// A freshly supplied owned set, matched against item ids only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogImport {
    ids: HashSet<u32>,
}

impl CatalogImport {
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        let ids = entries
            .iter()
            .filter_map(|e| e.unique_id.as_ref())
            .filter_map(|id| {
                let parsed = id.as_item_id();
                if parsed.is_none() {
                    log::debug!("Skipping non-numeric catalog id {:?}", id);
                }
                parsed
            })
            .collect();
        Self { ids }
    }

    pub fn from_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
