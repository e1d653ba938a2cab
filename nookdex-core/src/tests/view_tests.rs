use super::*;
use crate::codes::Category;

fn pattern(id: u32, name: &str, colors: &[Color]) -> Pattern {
    Pattern {
        name: name.to_string(),
        image_url: format!("img/{id}.png"),
        id,
        colors: colors.to_vec(),
        unique_entry_id: None,
    }
}

/// Two groups: "Red" with patterns A/B, "Blue" with a single unnamed pattern.
fn wardrobe() -> Item {
    Item::new(100, "Wardrobe", Category::Housewares)
        .with_colors([Color::Brown])
        .with_image("img/base.png")
        .with_variant(VariantGroup {
            name: "Red".to_string(),
            patterns: vec![
                pattern(101, "A", &[Color::Red]),
                pattern(102, "B", &[Color::Red, Color::White]),
            ],
        })
        .with_variant(VariantGroup {
            name: "Blue".to_string(),
            patterns: vec![pattern(103, "", &[Color::Blue])],
        })
}

#[test]
fn bare_item_displays_its_own_fields() {
    let item = Item::new(7, "Stool", Category::Housewares)
        .with_colors([Color::Green])
        .with_image("img/stool.png");
    let state = ViewState::default();
    assert!(current_variant(&item, &state).is_none());
    assert!(current_pattern(&item, &state).is_none());
    assert_eq!(display_id(&item, &state), 7);
    assert_eq!(display_image(&item, &state), "img/stool.png");
    assert_eq!(display_colors(&item, &state), &[Color::Green]);
    assert_eq!(display_name(&item, &state), "Stool");
}

#[test]
fn pattern_fields_take_precedence() {
    let item = wardrobe();
    let mut state = ViewState::default();
    assert_eq!(display_id(&item, &state), 101);
    assert_eq!(display_image(&item, &state), "img/101.png");
    assert_eq!(display_name(&item, &state), "Wardrobe - Red - A");

    assert!(state.set_variant_index(&item, 1));
    assert_eq!(display_id(&item, &state), 103);
    assert_eq!(display_colors(&item, &state), &[Color::Blue]);
    // empty pattern name is skipped
    assert_eq!(display_name(&item, &state), "Wardrobe - Blue");
}

#[test]
fn zero_pattern_id_and_empty_image_fall_back() {
    let item = Item::new(5, "Fence", Category::Fencing)
        .with_image("img/fence.png")
        .with_variant(VariantGroup {
            name: String::new(),
            patterns: vec![Pattern {
                name: String::new(),
                image_url: String::new(),
                id: 0,
                colors: vec![],
                unique_entry_id: None,
            }],
        });
    let state = ViewState::default();
    assert_eq!(display_id(&item, &state), 5);
    assert_eq!(display_image(&item, &state), "img/fence.png");
    assert_eq!(display_name(&item, &state), "Fence");
}

#[test]
fn valid_variant_index_sets_and_resets_pattern() {
    let item = wardrobe();
    for i in 0..item.variant_count() {
        let mut state = ViewState::default();
        state.set_variant_index(&item, 0);
        state.set_pattern_index(&item, 1);
        assert!(state.set_variant_index(&item, i));
        assert_eq!(state.variant_index(), i);
        assert_eq!(state.pattern_index(), 0);
    }
}

#[test]
fn invalid_indices_are_ignored() {
    let item = wardrobe();
    let mut state = ViewState::default();
    state.set_variant_index(&item, 0);
    state.set_pattern_index(&item, 1);

    assert!(!state.set_variant_index(&item, 2));
    assert!(!state.set_variant_index(&item, usize::MAX));
    assert_eq!(state.variant_index(), 0);
    assert_eq!(state.pattern_index(), 1);

    assert!(!state.set_pattern_index(&item, 2));
    assert_eq!(state.pattern_index(), 1);

    let bare = Item::new(1, "Bare", Category::Other);
    let mut bare_state = ViewState::default();
    assert!(!bare_state.set_variant_index(&bare, 0));
    assert!(!bare_state.set_pattern_index(&bare, 0));
    assert_eq!(bare_state, ViewState::default());
}

#[test]
fn stale_indices_are_clamped_on_read() {
    let item = wardrobe();
    let state = ViewState {
        variant_index: 9,
        pattern_index: 9,
        owned: false,
    };
    assert_eq!(current_variant(&item, &state).map(|g| g.name.as_str()), Some("Blue"));
    assert_eq!(current_pattern(&item, &state).map(|p| p.id), Some(103));
}

#[test]
fn switch_to_color_variant_round_trips() {
    let item = wardrobe();
    for color in [Color::Red, Color::White, Color::Blue] {
        let mut state = ViewState::default();
        assert!(state.switch_to_color_variant(&item, color));
        let pattern = current_pattern(&item, &state).unwrap();
        assert!(pattern.colors.contains(&color), "{:?} not in {:?}", color, pattern);
    }
}

#[test]
fn failed_color_switch_leaves_state() {
    let item = wardrobe();
    let mut state = ViewState::default();
    state.set_variant_index(&item, 1);
    let before = state;
    assert!(!state.switch_to_color_variant(&item, Color::Pink));
    assert_eq!(state, before);
}

#[test]
fn has_patterns_follows_current_group() {
    let item = wardrobe();
    let mut state = ViewState::default();
    assert!(has_patterns(&item, &state));
    state.set_variant_index(&item, 1);
    assert!(!has_patterns(&item, &state));
}
