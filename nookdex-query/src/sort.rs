//! Sort orders for the catalog list.

use std::cmp::{Ordering, Reverse};
use std::str::FromStr;

use deunicode::deunicode;
use nookdex_core::CatalogItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    NameAsc,
    NameDesc,
    #[default]
    IdAsc,
    IdDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::IdAsc => "id-asc",
            Self::IdDesc => "id-desc",
        }
    }

    pub fn all() -> &'static [SortKey] {
        &[Self::NameAsc, Self::NameDesc, Self::IdAsc, Self::IdDesc]
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}' (expected name-asc, name-desc, id-asc or id-desc)")]
pub struct SortKeyParseError(pub String);

impl FromStr for SortKey {
    type Err = SortKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| SortKeyParseError(s.to_string()))
    }
}

/// Key that orders names the way a reader expects across scripts.
///
/// Text is transliterated to ASCII (CJK becomes its romanization), then
/// lowercased, so "Écran", "ecran" and "Ecran" sort together and Chinese
/// names sort roughly by pinyin.
pub fn collation_key(name: &str) -> String {
    deunicode(name).to_lowercase()
}

/// Total order on names: collation key first, raw string to break ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// A sorted copy of `items`. Stable: equal elements keep their order.
pub fn sort_items<'a, I>(items: I, key: SortKey) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    let mut sorted: Vec<&CatalogItem> = items.into_iter().collect();
    match key {
        SortKey::NameAsc => {
            sorted.sort_by_cached_key(|entry| (collation_key(entry.name()), entry.name().to_string()))
        }
        SortKey::NameDesc => sorted.sort_by_cached_key(|entry| {
            Reverse((collation_key(entry.name()), entry.name().to_string()))
        }),
        SortKey::IdAsc => sorted.sort_by_key(|entry| entry.id()),
        SortKey::IdDesc => sorted.sort_by_key(|entry| Reverse(entry.id())),
    }
    sorted
}

/// Sort by a key string. An unrecognized string leaves the order as is.
pub fn sort_by_value<'a, I>(items: I, value: &str) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    match value.parse::<SortKey>() {
        Ok(key) => sort_items(items, key),
        Err(e) => {
            log::debug!("{}; keeping current order", e);
            items.into_iter().collect()
        }
    }
}

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod tests;
