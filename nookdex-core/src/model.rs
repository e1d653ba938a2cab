//! Canonical item model produced by normalization.
//!
//! These types are plain data: they carry no selection state. The
//! currently displayed variant/pattern lives in [`crate::ViewState`].

use serde::{Deserialize, Serialize};

use crate::codes::{Category, Color, ItemSize, Version};

/// One colorway/skin within a variant group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Localized pattern name. Empty when the variation has no pattern.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    /// Identifier shown instead of the item id while this pattern is displayed.
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub unique_entry_id: Option<String>,
}

/// A named group of patterns (a furniture "style", a clothing cut).
///
/// Normalization never produces a group with an empty pattern list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantGroup {
    /// Localized variant name. May be empty.
    #[serde(default)]
    pub name: String,
    pub patterns: Vec<Pattern>,
}

/// Position of a pattern inside an item's variant groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub variant: usize,
    pub pattern: usize,
}

impl Selection {
    pub fn new(variant: usize, pattern: usize) -> Self {
        Self { variant, pattern }
    }
}

/// A catalog item after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier. For items with variants this is the id of the
    /// first pattern of the first group.
    #[serde(default)]
    pub id: u32,
    /// Localized display name.
    pub name: String,
    /// Untranslated (English) name from the source record.
    #[serde(default)]
    pub raw_name: String,
    #[serde(default)]
    pub unique_entry_id: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub version: Option<Version>,
    #[serde(default)]
    pub size: Option<ItemSize>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    /// Localized series name, when the source record carries one.
    #[serde(default)]
    pub series_name: Option<String>,
    #[serde(default)]
    pub colors: Vec<Color>,
    /// Image URLs; the first entry is the fallback image.
    #[serde(default)]
    pub images: Vec<String>,
    /// How the item is obtained (e.g. "Nook's Cranny", "Crafting").
    #[serde(default)]
    pub source: Vec<String>,
    #[serde(default)]
    pub buy: Option<u32>,
    #[serde(default)]
    pub sell: Option<u32>,
    #[serde(default)]
    pub variants: Vec<VariantGroup>,
}

impl Item {
    /// Create an item with only the required fields set.
    pub fn new(id: u32, name: impl Into<String>, category: Category) -> Self {
        let name = name.into();
        Self {
            id,
            raw_name: name.clone(),
            name,
            unique_entry_id: None,
            category,
            version: None,
            size: None,
            tag: None,
            series: None,
            series_name: None,
            colors: Vec::new(),
            images: Vec::new(),
            source: Vec::new(),
            buy: None,
            sell: None,
            variants: Vec::new(),
        }
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    pub fn with_variant(mut self, group: VariantGroup) -> Self {
        self.variants.push(group);
        self
    }

    pub fn variant_groups(&self) -> &[VariantGroup] {
        &self.variants
    }

    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// More than one variant group, or one group with several patterns.
    pub fn has_variations(&self) -> bool {
        match self.variants.as_slice() {
            [] => false,
            [only] => only.patterns.len() > 1,
            _ => true,
        }
    }

    pub fn has_multiple_variants(&self) -> bool {
        self.variants.len() > 1
    }

    pub fn variant_by_index(&self, index: usize) -> Option<&VariantGroup> {
        self.variants.get(index)
    }

    pub fn variant_by_name(&self, name: &str) -> Option<&VariantGroup> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// The image shown when no pattern supplies one.
    pub fn fallback_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or("")
    }

    pub fn has_source(&self, source: &str) -> bool {
        self.source.iter().any(|s| s == source)
    }

    /// Whether the base item's own colors include `color`.
    pub fn has_color(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Whether the base colors or any pattern of any group include `color`.
    ///
    /// Independent of what is currently displayed.
    pub fn matches_color(&self, color: Color) -> bool {
        self.has_color(color)
            || self
                .variants
                .iter()
                .any(|v| v.patterns.iter().any(|p| p.colors.contains(&color)))
    }

    /// First (group, pattern) whose colors include `color`, in iteration order.
    ///
    /// An item without variant groups answers `(0, 0)` when its own colors
    /// match. Base colors are not consulted when groups exist.
    pub fn find_variant_by_color(&self, color: Color) -> Option<Selection> {
        if self.variants.is_empty() {
            return self.has_color(color).then_some(Selection::default());
        }
        self.variants.iter().enumerate().find_map(|(vi, group)| {
            group
                .patterns
                .iter()
                .position(|p| p.colors.contains(&color))
                .map(|pi| Selection::new(vi, pi))
        })
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
