use super::*;

fn pattern(id: u32, name: &str, colors: &[Color]) -> Pattern {
    Pattern {
        name: name.to_string(),
        image_url: format!("img/{id}.png"),
        id,
        colors: colors.to_vec(),
        unique_entry_id: None,
    }
}

fn group(name: &str, patterns: Vec<Pattern>) -> VariantGroup {
    VariantGroup {
        name: name.to_string(),
        patterns,
    }
}

#[test]
fn has_variations_counts_groups_and_patterns() {
    let bare = Item::new(1, "Stool", Category::Housewares);
    assert!(!bare.has_variations());

    let single = bare
        .clone()
        .with_variant(group("", vec![pattern(2, "", &[Color::Red])]));
    assert!(!single.has_variations());

    let two_patterns = bare.clone().with_variant(group(
        "Red",
        vec![pattern(2, "A", &[Color::Red]), pattern(3, "B", &[Color::Red])],
    ));
    assert!(two_patterns.has_variations());

    let two_groups = bare
        .with_variant(group("Red", vec![pattern(2, "", &[Color::Red])]))
        .with_variant(group("Blue", vec![pattern(3, "", &[Color::Blue])]));
    assert!(two_groups.has_variations());
    assert!(two_groups.has_multiple_variants());
}

#[test]
fn find_variant_by_color_takes_first_match() {
    let item = Item::new(10, "Sofa", Category::Housewares)
        .with_colors([Color::Green])
        .with_variant(group(
            "Natural",
            vec![
                pattern(11, "Plain", &[Color::Beige]),
                pattern(12, "Striped", &[Color::Blue, Color::White]),
            ],
        ))
        .with_variant(group(
            "Dark",
            vec![
                pattern(13, "Plain", &[Color::Blue]),
                pattern(14, "Striped", &[Color::White]),
            ],
        ));

    assert_eq!(
        item.find_variant_by_color(Color::Blue),
        Some(Selection::new(0, 1))
    );
    assert_eq!(
        item.find_variant_by_color(Color::White),
        Some(Selection::new(0, 1))
    );
    // base colors are ignored once groups exist
    assert_eq!(item.find_variant_by_color(Color::Green), None);
    assert_eq!(item.find_variant_by_color(Color::Red), None);
}

#[test]
fn find_variant_by_color_without_groups_uses_base_colors() {
    let item = Item::new(1, "Lamp", Category::Housewares).with_colors([Color::Yellow]);
    assert_eq!(
        item.find_variant_by_color(Color::Yellow),
        Some(Selection::default())
    );
    assert_eq!(item.find_variant_by_color(Color::Red), None);
}

#[test]
fn matches_color_checks_base_and_every_pattern() {
    let item = Item::new(1, "Rug", Category::Rugs)
        .with_colors([Color::Brown])
        .with_variant(group("", vec![pattern(2, "", &[Color::Red])]))
        .with_variant(group("", vec![pattern(3, "", &[Color::Aqua])]));
    assert!(item.matches_color(Color::Brown));
    assert!(item.matches_color(Color::Aqua));
    assert!(!item.matches_color(Color::Pink));
}

#[test]
fn lookups_by_index_and_name() {
    let item = Item::new(1, "Shirt", Category::Tops)
        .with_variant(group("Red", vec![pattern(2, "", &[])]))
        .with_variant(group("Blue", vec![pattern(3, "", &[])]));
    assert_eq!(item.variant_by_index(1).map(|g| g.name.as_str()), Some("Blue"));
    assert!(item.variant_by_index(2).is_none());
    assert_eq!(item.variant_by_name("Red").map(|g| g.patterns[0].id), Some(2));
    assert!(item.variant_by_name("Green").is_none());
}

#[test]
fn missing_optional_fields_deserialize_to_defaults() {
    let item: Item =
        serde_json::from_str(r#"{"name":"Chair","category":"Housewares"}"#).unwrap();
    assert!(item.variant_groups().is_empty());
    assert_eq!(item.fallback_image(), "");
    assert_eq!(item.id, 0);
    assert_eq!(item.version, None);
    assert!(item.source.is_empty());
}
