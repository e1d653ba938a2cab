//! Display names for code values, loaded from the translations file.

use std::collections::HashMap;

use nookdex_core::{Category, Color, ItemSize, Version};
use serde::Deserialize;

/// Which code table a lookup goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Category,
    Source,
    Color,
    Tag,
    Series,
    Version,
    Size,
}

/// Label used when an optional code is absent.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Maps code strings to display strings.
///
/// Lookups that miss fall back to the raw code, so a missing table entry
/// is never an error.
pub trait NameResolver {
    fn lookup(&self, kind: NameKind, code: &str) -> Option<&str>;

    fn resolve(&self, kind: NameKind, code: &str) -> String {
        self.lookup(kind, code)
            .map(str::to_string)
            .unwrap_or_else(|| code.to_string())
    }

    fn category_name(&self, category: Category) -> String {
        self.resolve(NameKind::Category, category.as_str())
    }

    fn color_name(&self, color: Color) -> String {
        self.resolve(NameKind::Color, color.as_str())
    }

    fn version_name(&self, version: Option<Version>) -> String {
        match version {
            Some(v) => self.resolve(NameKind::Version, v.as_str()),
            None => UNKNOWN_NAME.to_string(),
        }
    }

    fn size_name(&self, size: Option<ItemSize>) -> String {
        match size {
            Some(s) => self.resolve(NameKind::Size, s.as_str()),
            None => UNKNOWN_NAME.to_string(),
        }
    }

    fn source_name(&self, source: &str) -> String {
        self.resolve(NameKind::Source, source)
    }

    fn tag_name(&self, tag: &str) -> String {
        self.resolve(NameKind::Tag, tag)
    }

    fn series_name(&self, series: &str) -> String {
        self.resolve(NameKind::Series, series)
    }
}

/// Contents of `translations.json`. Every table is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Translations {
    #[serde(default)]
    pub categories: HashMap<String, String>,
    #[serde(default)]
    pub sources: HashMap<String, String>,
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(default)]
    pub series: HashMap<String, String>,
    #[serde(default)]
    pub versions: HashMap<String, String>,
    #[serde(default)]
    pub sizes: HashMap<String, String>,
}

impl Translations {
    fn table(&self, kind: NameKind) -> &HashMap<String, String> {
        match kind {
            NameKind::Category => &self.categories,
            NameKind::Source => &self.sources,
            NameKind::Color => &self.colors,
            NameKind::Tag => &self.tags,
            NameKind::Series => &self.series,
            NameKind::Version => &self.versions,
            NameKind::Size => &self.sizes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.sources.is_empty()
            && self.colors.is_empty()
            && self.tags.is_empty()
            && self.series.is_empty()
            && self.versions.is_empty()
            && self.sizes.is_empty()
    }
}

impl NameResolver for Translations {
    fn lookup(&self, kind: NameKind, code: &str) -> Option<&str> {
        self.table(kind)
            .get(code)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_resolve_and_misses_fall_back_to_code() {
        let names: Translations = serde_json::from_str(
            r#"{"categories":{"Housewares":"家具"},"colors":{"Red":"红色","Blue":""}}"#,
        )
        .unwrap();
        assert_eq!(names.category_name(Category::Housewares), "家具");
        assert_eq!(names.category_name(Category::Tops), "Tops");
        assert_eq!(names.color_name(Color::Red), "红色");
        // empty translation counts as missing
        assert_eq!(names.color_name(Color::Blue), "Blue");
        assert_eq!(names.tag_name("Chair"), "Chair");
    }

    #[test]
    fn absent_codes_map_to_unknown() {
        let names = Translations::default();
        assert!(names.is_empty());
        assert_eq!(names.version_name(None), UNKNOWN_NAME);
        assert_eq!(names.size_name(None), UNKNOWN_NAME);
        assert_eq!(names.version_name(Some(Version::V200)), "2.0.0");
        assert_eq!(names.size_name(Some(ItemSize::S1x1)), "1x1");
    }
}
