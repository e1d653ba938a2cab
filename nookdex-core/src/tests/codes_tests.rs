use super::*;

#[test]
fn source_strings_round_trip() {
    for &category in Category::all() {
        let parsed: Category = category.as_str().parse().unwrap();
        assert_eq!(parsed, category, "round-trip failed for {:?}", category);
    }
    for &version in Version::all() {
        assert_eq!(Version::from_str_loose(version.as_str()), Some(version));
    }
    for &size in ItemSize::all() {
        assert_eq!(ItemSize::from_str_loose(size.as_str()), Some(size));
    }
    for &color in Color::all() {
        assert_eq!(Color::from_str_loose(color.as_str()), Some(color));
    }
}

#[test]
fn numeric_codes_resolve() {
    assert_eq!(Category::from_str_loose("5"), Some(Category::Tops));
    assert_eq!(Category::from_str_loose("27"), Some(Category::Other));
    assert_eq!(Version::from_str_loose("14"), Some(Version::V204));
    assert_eq!(ItemSize::from_str_loose("3"), Some(ItemSize::S1x1));
    assert_eq!(Color::from_str_loose("1"), Some(Color::Red));
    assert_eq!(Color::from_str_loose("99"), None);
}

#[test]
fn loose_spellings_resolve() {
    let cases = [
        ("wall-mounted", Category::WallMounted),
        ("WallMounted", Category::WallMounted),
        ("tools / goods", Category::ToolsGoods),
        ("message cards", Category::MessageCards),
        ("DRESS-UP", Category::DressUp),
    ];
    for (input, expected) in cases {
        assert_eq!(
            Category::from_str_loose(input),
            Some(expected),
            "'{}' should parse to {:?}",
            input,
            expected
        );
    }
    assert_eq!(Color::from_str_loose("grey"), Some(Color::Gray));
    assert_eq!(Color::from_str_loose(" blue "), Some(Color::Blue));
}

#[test]
fn similar_versions_and_sizes_stay_distinct() {
    assert_eq!(Version::from_str_loose("1.1.0"), Some(Version::V110));
    assert_eq!(Version::from_str_loose("1.10.0"), Some(Version::V1100));
    assert_eq!(Version::from_str_loose("1.11.0"), Some(Version::V1110));
    assert_eq!(ItemSize::from_str_loose("1x1.5"), Some(ItemSize::S1x15));
    assert_eq!(ItemSize::from_str_loose("1.5x1.5"), Some(ItemSize::S15x15));
    assert_eq!(ItemSize::from_str_loose("0.5x1"), Some(ItemSize::S05x1));
    assert_eq!(ItemSize::from_str_loose("1x0.5"), Some(ItemSize::S1x05));
}

#[test]
fn missing_or_unknown_sheet_is_other() {
    assert_eq!(Category::from_sheet(None), Category::Other);
    assert_eq!(Category::from_sheet(Some("")), Category::Other);
    assert_eq!(Category::from_sheet(Some("Insects")), Category::Other);
    assert_eq!(Category::from_sheet(Some("Housewares")), Category::Housewares);
}

#[test]
fn parse_error_names_the_table() {
    let err = "Plaid".parse::<Color>().unwrap_err();
    assert_eq!(err.kind, "color");
    assert_eq!(err.to_string(), "unknown color: 'Plaid'");
    assert!("".parse::<Version>().is_err());
}

#[test]
fn codes_are_sequential() {
    for (i, category) in Category::all().iter().enumerate() {
        assert_eq!(category.code() as usize, i + 1);
    }
    for (i, color) in Color::all().iter().enumerate() {
        assert_eq!(color.code() as usize, i + 1);
    }
    assert_eq!(Color::Colorful.swatch_hex(), None);
    assert_eq!(Color::Red.swatch_hex(), Some("#e74c3c"));
}
