//! Per-item selection state and the display projections derived from it.
//!
//! Projections are free functions of `(&Item, &ViewState)` so they can be
//! computed and tested without any UI layer in the picture.

use serde::{Deserialize, Serialize};

use crate::codes::Color;
use crate::model::{Item, Pattern, Selection, VariantGroup};

/// Separator between item, variant and pattern names in [`display_name`].
pub const NAME_SEPARATOR: &str = " - ";

/// Mutable state kept alongside an [`Item`]: which variant/pattern is
/// displayed and whether the user owns the item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    variant_index: usize,
    pattern_index: usize,
    pub owned: bool,
}

impl ViewState {
    pub fn new(owned: bool) -> Self {
        Self {
            owned,
            ..Self::default()
        }
    }

    pub fn variant_index(&self) -> usize {
        self.variant_index
    }

    pub fn pattern_index(&self) -> usize {
        self.pattern_index
    }

    /// Select a variant group and reset the pattern to the first one.
    ///
    /// Out-of-range indices are ignored. Returns whether the state changed.
    pub fn set_variant_index(&mut self, item: &Item, index: usize) -> bool {
        if index >= item.variant_count() {
            return false;
        }
        self.variant_index = index;
        self.pattern_index = 0;
        true
    }

    /// Select a pattern within the current variant group.
    ///
    /// Ignored when there is no current group or the index is out of range.
    pub fn set_pattern_index(&mut self, item: &Item, index: usize) -> bool {
        match current_variant(item, self) {
            Some(group) if index < group.patterns.len() => {
                self.pattern_index = index;
                true
            }
            _ => false,
        }
    }

    /// Apply both setters for a resolved selection.
    pub fn select(&mut self, item: &Item, selection: Selection) {
        self.set_variant_index(item, selection.variant);
        self.set_pattern_index(item, selection.pattern);
    }

    /// Jump to the first pattern carrying `color`.
    ///
    /// Returns `false` and leaves the state untouched when nothing matches.
    pub fn switch_to_color_variant(&mut self, item: &Item, color: Color) -> bool {
        match item.find_variant_by_color(color) {
            Some(selection) => {
                self.select(item, selection);
                true
            }
            None => false,
        }
    }
}

/// The displayed variant group, with the stored index clamped into range.
pub fn current_variant<'a>(item: &'a Item, state: &ViewState) -> Option<&'a VariantGroup> {
    let groups = item.variant_groups();
    let last = groups.len().checked_sub(1)?;
    groups.get(state.variant_index.min(last))
}

/// The displayed pattern, with the stored index clamped into range.
pub fn current_pattern<'a>(item: &'a Item, state: &ViewState) -> Option<&'a Pattern> {
    let group = current_variant(item, state)?;
    let last = group.patterns.len().checked_sub(1)?;
    group.patterns.get(state.pattern_index.min(last))
}

/// Current variant group has more than one pattern to pick from.
pub fn has_patterns(item: &Item, state: &ViewState) -> bool {
    current_variant(item, state).is_some_and(|g| g.patterns.len() > 1)
}

/// Pattern id when displayed and non-zero, otherwise the item id.
pub fn display_id(item: &Item, state: &ViewState) -> u32 {
    current_pattern(item, state)
        .map(|p| p.id)
        .filter(|&id| id != 0)
        .unwrap_or(item.id)
}

/// Pattern image when displayed and non-empty, otherwise the fallback image.
pub fn display_image<'a>(item: &'a Item, state: &ViewState) -> &'a str {
    current_pattern(item, state)
        .map(|p| p.image_url.as_str())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| item.fallback_image())
}

pub fn display_colors<'a>(item: &'a Item, state: &ViewState) -> &'a [Color] {
    match current_pattern(item, state) {
        Some(pattern) => &pattern.colors,
        None => &item.colors,
    }
}

/// `"Item - Variant - Pattern"`, skipping empty variant/pattern names.
pub fn display_name(item: &Item, state: &ViewState) -> String {
    let mut parts = vec![item.name.as_str()];
    if let Some(group) = current_variant(item, state).filter(|g| !g.name.is_empty()) {
        parts.push(&group.name);
    }
    if let Some(pattern) = current_pattern(item, state).filter(|p| !p.name.is_empty()) {
        parts.push(&pattern.name);
    }
    parts.join(NAME_SEPARATOR)
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
