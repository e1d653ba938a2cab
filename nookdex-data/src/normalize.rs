//! Raw item records to canonical [`CatalogItem`]s.
//!
//! Variation sub-records are merged into variant groups keyed by their
//! localized variant name, in first-seen order. When an item has variants,
//! the first pattern of the first group supplies the item's representative
//! id, image and colors.

use std::collections::HashMap;

use nookdex_core::{
    CatalogItem, Category, Color, DEFAULT_CDN_HOST, Item, ItemSize, Pattern, VariantGroup,
    Version, resolve_image_url,
};

use crate::catalog::OwnedSet;
use crate::locale::{Locale, localized};
use crate::raw::{RawItem, RawVariation};

/// Settings that shape normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Which translation field supplies display names.
    pub locale: Locale,
    /// Host prefixed to relative image paths. `None` keeps paths as given.
    pub cdn_host: Option<String>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            cdn_host: Some(DEFAULT_CDN_HOST.to_string()),
        }
    }
}

impl NormalizeOptions {
    /// Options that keep image paths exactly as they appear in the data.
    pub fn raw_paths(locale: Locale) -> Self {
        Self {
            locale,
            cdn_host: None,
        }
    }

    pub fn image_url(&self, path: &str) -> String {
        match &self.cdn_host {
            Some(host) => resolve_image_url(path, host),
            None => path.to_string(),
        }
    }
}

/// Normalize a batch of raw records and sort the result by id.
///
/// Never fails: malformed fields degrade to defaults per record.
pub fn normalize_items(
    raw: &[RawItem],
    owned: &OwnedSet,
    options: &NormalizeOptions,
) -> Vec<CatalogItem> {
    let mut items: Vec<CatalogItem> = raw
        .iter()
        .map(|record| normalize_item(record, owned, options))
        .collect();
    items.sort_by_key(|entry| entry.item.id);

    let owned_count = items.iter().filter(|entry| entry.owned()).count();
    log::info!(
        "Normalized {} items ({} owned, locale {})",
        items.len(),
        owned_count,
        options.locale
    );
    items
}

/// Normalize one raw record.
pub fn normalize_item(raw: &RawItem, owned: &OwnedSet, options: &NormalizeOptions) -> CatalogItem {
    let raw_name = raw.name.clone().unwrap_or_default();
    if raw_name.is_empty() {
        log::debug!("Item record {:?} has no name", raw.record_id());
    }
    let name = localized(raw.translations.as_ref(), options.locale, &raw_name).to_string();

    let base_id = raw.record_id().unwrap_or(0);
    let base_image = first_non_empty(raw.image_candidates()).unwrap_or("");
    let base_colors = parse_colors(raw.colors.as_deref().unwrap_or_default(), &raw_name);

    let variants = group_variations(raw, base_id, base_image, &base_colors, options);

    let mut id = base_id;
    let mut image = options.image_url(base_image);
    let mut colors = base_colors;
    if let Some(first) = variants.first().and_then(|group| group.patterns.first()) {
        if first.id != 0 {
            id = first.id;
        }
        if !first.image_url.is_empty() {
            image = first.image_url.clone();
        }
        colors = first.colors.clone();
    }

    let mut images = Vec::new();
    if !image.is_empty() {
        images.push(image);
    }
    for candidate in raw.image_candidates().into_iter().flatten() {
        let url = options.image_url(candidate);
        if !url.is_empty() && !images.contains(&url) {
            images.push(url);
        }
    }

    let item = Item {
        id,
        name,
        unique_entry_id: non_empty(raw.unique_entry_id.as_deref()),
        category: Category::from_sheet(raw.source_sheet.as_deref()),
        version: parse_code(raw.version_added.as_deref(), "version", &raw_name, Version::from_str_loose),
        size: parse_code(raw.size.as_deref(), "size", &raw_name, ItemSize::from_str_loose),
        tag: non_empty(raw.tag.as_deref()),
        series: non_empty(raw.series.as_deref()),
        series_name: raw.series.as_deref().filter(|s| !s.is_empty()).map(|series| {
            localized(raw.series_translations.as_ref(), options.locale, series).to_string()
        }),
        colors,
        images,
        source: raw
            .source
            .iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect(),
        buy: price(raw.buy),
        sell: price(raw.sell),
        variants,
        raw_name,
    };

    let is_owned = is_owned(raw, &item.name, owned);
    CatalogItem::new(item, is_owned)
}

/// Merge variation records into groups keyed by variant name.
fn group_variations(
    raw: &RawItem,
    base_id: u32,
    base_image: &str,
    base_colors: &[Color],
    options: &NormalizeOptions,
) -> Vec<VariantGroup> {
    let variations = raw.variations.as_deref().unwrap_or_default();
    let mut groups: Vec<VariantGroup> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for variation in variations {
        let variant_name = localized(
            variation.variant_translations.as_ref(),
            options.locale,
            variation.variation.as_deref().unwrap_or(""),
        )
        .to_string();

        let pattern = build_pattern(variation, raw, base_id, base_image, base_colors, options);

        let slot = *index_by_name.entry(variant_name.clone()).or_insert_with(|| {
            groups.push(VariantGroup {
                name: variant_name,
                patterns: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].patterns.push(pattern);
    }
    groups
}

fn build_pattern(
    variation: &RawVariation,
    raw: &RawItem,
    base_id: u32,
    base_image: &str,
    base_colors: &[Color],
    options: &NormalizeOptions,
) -> Pattern {
    let [image, storage, closet, framed, _] = variation.image_candidates();
    let image_url = first_non_empty([image, storage, closet, framed, raw.inventory_image.as_deref()])
        .unwrap_or(base_image);

    let colors = match &variation.colors {
        Some(list) => parse_colors(list, raw.name.as_deref().unwrap_or("")),
        None => base_colors.to_vec(),
    };

    Pattern {
        name: localized(
            variation.pattern_translations.as_ref(),
            options.locale,
            variation.pattern.as_deref().unwrap_or(""),
        )
        .to_string(),
        image_url: options.image_url(image_url),
        id: variation.record_id().filter(|&id| id != 0).unwrap_or(base_id),
        colors,
        unique_entry_id: non_empty(variation.unique_entry_id.as_deref()),
    }
}

fn is_owned(raw: &RawItem, name: &str, owned: &OwnedSet) -> bool {
    if owned.is_empty() {
        return false;
    }
    let id_owned = |id: Option<u32>| id.is_some_and(|id| owned.contains_id(&id.to_string()));
    let entry_owned = |key: Option<&str>| key.is_some_and(|key| owned.contains_id(key));

    owned.contains_name(name)
        || id_owned(raw.record_id())
        || entry_owned(raw.unique_entry_id.as_deref())
        || raw.variations.iter().flatten().any(|v| {
            entry_owned(v.unique_entry_id.as_deref()) || id_owned(v.record_id())
        })
}

fn first_non_empty<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<&'a str> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

fn price(value: Option<i64>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

/// Parse color strings, dropping any that are not in the color table.
pub(crate) fn parse_colors(raw: &[String], context: &str) -> Vec<Color> {
    let mut colors = Vec::with_capacity(raw.len());
    for value in raw {
        match Color::from_str_loose(value) {
            Some(color) if !colors.contains(&color) => colors.push(color),
            Some(_) => {}
            None => log::debug!("Dropping unknown color '{}' on '{}'", value, context),
        }
    }
    colors
}

/// Parse an optional code field; unrecognized values become `None`.
pub(crate) fn parse_code<T>(
    value: Option<&str>,
    kind: &str,
    context: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let value = value.filter(|s| !s.trim().is_empty())?;
    let parsed = parse(value);
    if parsed.is_none() {
        log::debug!("Unknown {} '{}' on '{}'", kind, value, context);
    }
    parsed
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
