use nookdex_core::{Item, Pattern, VariantGroup};

use super::*;

fn entry(id: u32, name: &str, category: Category, owned: bool) -> CatalogItem {
    CatalogItem::new(Item::new(id, name, category), owned)
}

fn painted(id: u32, base: Color, patterns: &[(&str, Color)]) -> CatalogItem {
    let mut item = Item::new(id, format!("Cabinet {id}"), Category::Housewares).with_colors([base]);
    for (i, (group, color)) in patterns.iter().enumerate() {
        item = item.with_variant(VariantGroup {
            name: group.to_string(),
            patterns: vec![Pattern {
                name: String::new(),
                image_url: format!("{id}-{i}.png"),
                id: id * 10 + i as u32,
                colors: vec![*color],
                unique_entry_id: None,
            }],
        });
    }
    CatalogItem::from(item)
}

fn ids(found: &[&CatalogItem]) -> Vec<u32> {
    found.iter().map(|c| c.id()).collect()
}

fn catalog() -> Vec<CatalogItem> {
    let mut tee = entry(1, "Tee", Category::Tops, true);
    tee.item.source = vec!["Able Sisters".to_string()];
    tee.item.tag = Some("Shirts".to_string());
    tee.item.version = Some(Version::V100);

    let mut hoodie = entry(2, "Hoodie", Category::Tops, false);
    hoodie.item.size = Some(ItemSize::S1x1);
    hoodie.item.series = Some("cute".to_string());

    let mut chair = entry(3, "Wooden Chair", Category::Housewares, true);
    chair.item.source = vec!["Crafting".to_string(), "Able Sisters".to_string()];
    chair.item.version = Some(Version::V200);

    vec![tee, hoodie, chair, painted(4, Color::Brown, &[("Red", Color::Red), ("Blue", Color::Blue)])]
}

#[test]
fn empty_criteria_returns_everything_in_order() {
    let items = catalog();
    let criteria = FilterCriteria::new();
    assert!(criteria.is_empty());
    assert_eq!(ids(&filter_items(&items, &criteria)), [1, 2, 3, 4]);
}

#[test]
fn category_and_owned_together() {
    let items = vec![
        entry(1, "Tee", Category::Tops, true),
        entry(2, "Hoodie", Category::Tops, false),
        entry(3, "Chair", Category::Housewares, false),
    ];
    let criteria = FilterCriteria::new()
        .category(Category::Tops)
        .owned(OwnedFilter::Owned);
    assert_eq!(ids(&filter_items(&items, &criteria)), [1]);
}

#[test]
fn each_dimension_narrows() {
    let items = catalog();
    let check = |criteria: FilterCriteria, expected: &[u32]| {
        assert_eq!(ids(&filter_items(&items, &criteria)), expected, "{criteria:?}");
    };
    check(FilterCriteria::new().search("CHAIR"), &[3]);
    check(FilterCriteria::new().search("  "), &[1, 2, 3, 4]);
    check(FilterCriteria::new().owned(OwnedFilter::NotOwned), &[2, 4]);
    check(FilterCriteria::new().version(Version::V200), &[3]);
    check(FilterCriteria::new().source("Able Sisters"), &[1, 3]);
    check(FilterCriteria::new().size(ItemSize::S1x1), &[2]);
    check(FilterCriteria::new().tag("Shirts"), &[1]);
    check(FilterCriteria::new().series("cute"), &[2]);
    check(FilterCriteria::new().color(Color::Blue), &[4]);
    check(FilterCriteria::new().color(Color::Brown), &[4]);
    check(FilterCriteria::new().color(Color::Pink), &[]);
}

#[test]
fn search_matches_variant_names_and_raw_name() {
    let mut items = vec![painted(4, Color::Brown, &[("Red", Color::Red)])];
    items[0].item.name = "柜子".to_string();
    items[0].item.raw_name = "cabinet".to_string();
    assert_eq!(ids(&filter_items(&items, &FilterCriteria::new().search("red"))), [4]);
    assert_eq!(ids(&filter_items(&items, &FilterCriteria::new().search("Cabinet"))), [4]);
    assert_eq!(ids(&filter_items(&items, &FilterCriteria::new().search("柜"))), [4]);
}

#[test]
fn filters_commute() {
    let items = catalog();
    let a = FilterCriteria::new().source("Able Sisters");
    let b = FilterCriteria::new().owned(OwnedFilter::Owned);

    let ab = filter_items(filter_items(&items, &a), &b);
    let ba = filter_items(filter_items(&items, &b), &a);
    let mut ab = ids(&ab);
    let mut ba = ids(&ba);
    ab.sort();
    ba.sort();
    assert_eq!(ab, ba);
    assert_eq!(ab, [1, 3]);
}

#[test]
fn pure_filter_leaves_selection_alone() {
    let items = catalog();
    let before = items.clone();
    filter_items(&items, &FilterCriteria::new().color(Color::Blue));
    assert_eq!(items, before);
}

#[test]
fn sync_display_jumps_to_matching_pattern() {
    let mut items = catalog();
    let matched = filter_and_sync_display(&mut items, &FilterCriteria::new().color(Color::Blue));
    assert_eq!(matched, [3]);
    assert_eq!(items[3].variant_index(), 1);
    assert_eq!(items[3].display_colors(), &[Color::Blue]);
    // unmatched items are untouched
    assert_eq!(items[0].variant_index(), 0);
}

#[test]
fn sync_display_without_color_mutates_nothing() {
    let mut items = catalog();
    items[3].set_variant_index(1);
    let before = items.clone();
    let matched = filter_and_sync_display(&mut items, &FilterCriteria::new().category(Category::Housewares));
    assert_eq!(matched, [2, 3]);
    assert_eq!(items, before);
}

#[test]
fn owned_filter_strings() {
    assert_eq!("all".parse::<OwnedFilter>().unwrap(), OwnedFilter::All);
    assert_eq!("Owned".parse::<OwnedFilter>().unwrap(), OwnedFilter::Owned);
    assert_eq!("not_owned".parse::<OwnedFilter>().unwrap(), OwnedFilter::NotOwned);
    assert!("mine".parse::<OwnedFilter>().is_err());
    for f in OwnedFilter::all() {
        assert_eq!(f.as_str().parse::<OwnedFilter>().unwrap(), *f);
    }
    assert_eq!(OwnedFilter::from_flag(Some(false)), OwnedFilter::NotOwned);
    assert_eq!(OwnedFilter::from_flag(None), OwnedFilter::All);
}
