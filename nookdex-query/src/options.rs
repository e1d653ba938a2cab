//! Choices offered for each filter dimension.

use std::collections::{BTreeSet, HashMap};

use nookdex_core::{CatalogItem, Category, Color, ItemSize, Version};
use nookdex_data::NameResolver;

use crate::sort::compare_names;

/// A selectable value and its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption<T> {
    pub value: T,
    pub name: String,
}

/// Options for every filter dimension.
///
/// Categories, versions, sizes and colors list the full code tables.
/// Sources, tags and series list what the loaded items actually use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub categories: Vec<FilterOption<Category>>,
    pub versions: Vec<FilterOption<Version>>,
    pub sizes: Vec<FilterOption<ItemSize>>,
    pub colors: Vec<FilterOption<Color>>,
    pub sources: Vec<FilterOption<String>>,
    pub tags: Vec<FilterOption<String>>,
    pub series: Vec<FilterOption<String>>,
}

pub fn populate_filter_options(items: &[CatalogItem], names: &impl NameResolver) -> FilterOptions {
    FilterOptions {
        categories: Category::all()
            .iter()
            .map(|&c| FilterOption {
                value: c,
                name: names.category_name(c),
            })
            .collect(),
        versions: Version::all()
            .iter()
            .map(|&v| FilterOption {
                value: v,
                name: names.version_name(Some(v)),
            })
            .collect(),
        sizes: ItemSize::all()
            .iter()
            .map(|&s| FilterOption {
                value: s,
                name: names.size_name(Some(s)),
            })
            .collect(),
        colors: Color::all()
            .iter()
            .map(|&c| FilterOption {
                value: c,
                name: names.color_name(c),
            })
            .collect(),
        sources: source_options(items, names),
        tags: tag_options(items, names),
        series: series_options(items, names),
    }
}

/// Distinct sources in code order.
fn source_options(items: &[CatalogItem], names: &impl NameResolver) -> Vec<FilterOption<String>> {
    let distinct: BTreeSet<&str> = items
        .iter()
        .flat_map(|entry| entry.item.source.iter().map(String::as_str))
        .collect();
    distinct
        .into_iter()
        .map(|s| FilterOption {
            value: s.to_string(),
            name: names.source_name(s),
        })
        .collect()
}

/// Distinct tags, collated by display name.
fn tag_options(items: &[CatalogItem], names: &impl NameResolver) -> Vec<FilterOption<String>> {
    let distinct: BTreeSet<&str> = items
        .iter()
        .filter_map(|entry| entry.item.tag.as_deref())
        .collect();
    let mut options: Vec<FilterOption<String>> = distinct
        .into_iter()
        .map(|t| FilterOption {
            value: t.to_string(),
            name: names.tag_name(t),
        })
        .collect();
    options.sort_by(|a, b| compare_names(&a.name, &b.name));
    options
}

/// Distinct series, named by the first item's localized series name.
fn series_options(items: &[CatalogItem], names: &impl NameResolver) -> Vec<FilterOption<String>> {
    let mut seen: HashMap<&str, String> = HashMap::new();
    for entry in items {
        let Some(series) = entry.item.series.as_deref() else {
            continue;
        };
        seen.entry(series).or_insert_with(|| {
            entry
                .item
                .series_name
                .clone()
                .filter(|n| !n.is_empty() && n != series)
                .unwrap_or_else(|| names.series_name(series))
        });
    }
    let mut options: Vec<FilterOption<String>> = seen
        .into_iter()
        .map(|(value, name)| FilterOption {
            value: value.to_string(),
            name,
        })
        .collect();
    options.sort_by(|a, b| compare_names(&a.name, &b.name).then_with(|| a.value.cmp(&b.value)));
    options
}

#[cfg(test)]
mod tests {
    use nookdex_core::Item;
    use nookdex_data::Translations;

    use super::*;

    fn entry(id: u32, sources: &[&str], tag: Option<&str>, series: Option<(&str, &str)>) -> CatalogItem {
        let mut item = Item::new(id, format!("item {id}"), Category::Housewares);
        item.source = sources.iter().map(|s| s.to_string()).collect();
        item.tag = tag.map(str::to_string);
        if let Some((code, name)) = series {
            item.series = Some(code.to_string());
            item.series_name = Some(name.to_string());
        }
        CatalogItem::from(item)
    }

    #[test]
    fn closed_tables_are_listed_in_full() {
        let options = populate_filter_options(&[], &Translations::default());
        assert_eq!(options.categories.len(), Category::all().len());
        assert_eq!(options.versions.len(), 14);
        assert_eq!(options.sizes.len(), 16);
        assert_eq!(options.colors.len(), 14);
        assert!(options.sources.is_empty());
        assert!(options.tags.is_empty());
        assert!(options.series.is_empty());
    }

    #[test]
    fn open_dimensions_are_distinct_and_ordered() {
        let items = vec![
            entry(1, &["Nook's Cranny", "Crafting"], Some("Chair"), Some(("wooden", "Wooden"))),
            entry(2, &["Crafting"], Some("bed"), Some(("antique", "Antique"))),
            entry(3, &[], Some("Chair"), Some(("wooden", "Wooden"))),
            entry(4, &[], None, None),
        ];
        let names: Translations =
            serde_json::from_str(r#"{"sources":{"Crafting":"DIY"}}"#).unwrap();
        let options = populate_filter_options(&items, &names);

        let sources: Vec<(&str, &str)> = options
            .sources
            .iter()
            .map(|o| (o.value.as_str(), o.name.as_str()))
            .collect();
        assert_eq!(sources, [("Crafting", "DIY"), ("Nook's Cranny", "Nook's Cranny")]);

        let tags: Vec<&str> = options.tags.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(tags, ["bed", "Chair"]);

        let series: Vec<&str> = options.series.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(series, ["Antique", "Wooden"]);
    }
}
