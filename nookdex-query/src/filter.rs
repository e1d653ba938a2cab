//! Filter criteria and the filter pass over a catalog.
//!
//! Every criterion is optional; an unset criterion matches everything and
//! the set criteria are ANDed. Filtering never reorders.

use std::str::FromStr;

use nookdex_core::{CatalogItem, Category, Color, ItemSize, Version};

/// Tri-state ownership filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OwnedFilter {
    #[default]
    All,
    Owned,
    NotOwned,
}

impl OwnedFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Owned => "owned",
            Self::NotOwned => "not-owned",
        }
    }

    pub fn all() -> &'static [OwnedFilter] {
        &[Self::All, Self::Owned, Self::NotOwned]
    }

    /// `None` = no filtering, `Some(true)` = owned only, `Some(false)` = not owned only.
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => Self::All,
            Some(true) => Self::Owned,
            Some(false) => Self::NotOwned,
        }
    }

    pub fn matches(&self, owned: bool) -> bool {
        match self {
            Self::All => true,
            Self::Owned => owned,
            Self::NotOwned => !owned,
        }
    }
}

impl std::fmt::Display for OwnedFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ownership filter '{0}' (expected all, owned or not-owned)")]
pub struct OwnedFilterParseError(pub String);

impl FromStr for OwnedFilter {
    type Err = OwnedFilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "" | "all" => Ok(Self::All),
            "owned" => Ok(Self::Owned),
            "not-owned" | "notowned" | "unowned" => Ok(Self::NotOwned),
            _ => Err(OwnedFilterParseError(s.to_string())),
        }
    }
}

/// The active filter set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the display name or the raw name.
    pub search: Option<String>,
    pub category: Option<Category>,
    pub owned: OwnedFilter,
    pub version: Option<Version>,
    /// Must be one of the item's sources.
    pub source: Option<String>,
    pub size: Option<ItemSize>,
    pub tag: Option<String>,
    pub series: Option<String>,
    /// Matches base colors or any pattern's colors.
    pub color: Option<Color>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn owned(mut self, owned: OwnedFilter) -> Self {
        self.owned = owned;
        self
    }

    pub fn version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn size(mut self, size: ItemSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none()
            && self.category.is_none()
            && self.owned == OwnedFilter::All
            && self.version.is_none()
            && self.source.is_none()
            && self.size.is_none()
            && self.tag.is_none()
            && self.series.is_none()
            && self.color.is_none()
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether `entry` passes every set criterion. Pure.
    pub fn matches(&self, entry: &CatalogItem) -> bool {
        let search = self.search_term();
        self.matches_with(entry, search.as_deref())
    }

    fn matches_with(&self, entry: &CatalogItem, search: Option<&str>) -> bool {
        let item = &entry.item;
        search.is_none_or(|term| {
            entry.display_name().to_lowercase().contains(term)
                || item.raw_name.to_lowercase().contains(term)
        }) && self.category.is_none_or(|c| item.category == c)
            && self.owned.matches(entry.owned())
            && self.version.is_none_or(|v| item.version == Some(v))
            && self.source.as_deref().is_none_or(|s| item.has_source(s))
            && self.size.is_none_or(|s| item.size == Some(s))
            && self.tag.as_deref().is_none_or(|t| item.tag.as_deref() == Some(t))
            && self
                .series
                .as_deref()
                .is_none_or(|s| item.series.as_deref() == Some(s))
            && self.color.is_none_or(|c| item.matches_color(c))
    }
}

/// Items passing `criteria`, in their original order.
pub fn filter_items<'a, I>(items: I, criteria: &FilterCriteria) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    let search = criteria.search_term();
    items
        .into_iter()
        .filter(|entry| criteria.matches_with(entry, search.as_deref()))
        .collect()
}

/// Filter, and jump each color-matched item to its first matching pattern.
///
/// Returns the indices of the matching items, in order. Items that do not
/// match are left untouched. Without a color criterion this mutates nothing.
pub fn filter_and_sync_display(items: &mut [CatalogItem], criteria: &FilterCriteria) -> Vec<usize> {
    let search = criteria.search_term();
    let mut matched = Vec::new();
    for (index, entry) in items.iter_mut().enumerate() {
        if !criteria.matches_with(entry, search.as_deref()) {
            continue;
        }
        if let Some(color) = criteria.color {
            if !entry.switch_to_color_variant(color) {
                log::debug!(
                    "Item {} matches {} only through its base colors",
                    entry.id(),
                    color
                );
            }
        }
        matched.push(index);
    }
    matched
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
