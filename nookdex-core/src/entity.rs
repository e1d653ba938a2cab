//! An item paired with its view state.

use serde::{Deserialize, Serialize};

use crate::codes::Color;
use crate::model::{Item, Pattern, Selection, VariantGroup};
use crate::view::{self, ViewState};

/// The unit the repository, filter and sort passes work on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub item: Item,
    #[serde(default)]
    pub state: ViewState,
}

impl CatalogItem {
    pub fn new(item: Item, owned: bool) -> Self {
        Self {
            item,
            state: ViewState::new(owned),
        }
    }

    pub fn id(&self) -> u32 {
        self.item.id
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn owned(&self) -> bool {
        self.state.owned
    }

    pub fn set_owned(&mut self, owned: bool) {
        self.state.owned = owned;
    }

    pub fn variant_groups(&self) -> &[VariantGroup] {
        self.item.variant_groups()
    }

    pub fn has_variations(&self) -> bool {
        self.item.has_variations()
    }

    pub fn has_patterns(&self) -> bool {
        view::has_patterns(&self.item, &self.state)
    }

    pub fn variant_index(&self) -> usize {
        self.state.variant_index()
    }

    pub fn pattern_index(&self) -> usize {
        self.state.pattern_index()
    }

    pub fn set_variant_index(&mut self, index: usize) -> bool {
        self.state.set_variant_index(&self.item, index)
    }

    pub fn set_pattern_index(&mut self, index: usize) -> bool {
        self.state.set_pattern_index(&self.item, index)
    }

    pub fn current_variant(&self) -> Option<&VariantGroup> {
        view::current_variant(&self.item, &self.state)
    }

    pub fn current_pattern(&self) -> Option<&Pattern> {
        view::current_pattern(&self.item, &self.state)
    }

    pub fn display_id(&self) -> u32 {
        view::display_id(&self.item, &self.state)
    }

    pub fn display_image(&self) -> &str {
        view::display_image(&self.item, &self.state)
    }

    pub fn display_colors(&self) -> &[Color] {
        view::display_colors(&self.item, &self.state)
    }

    pub fn display_name(&self) -> String {
        view::display_name(&self.item, &self.state)
    }

    pub fn find_variant_by_color(&self, color: Color) -> Option<Selection> {
        self.item.find_variant_by_color(color)
    }

    pub fn switch_to_color_variant(&mut self, color: Color) -> bool {
        self.state.switch_to_color_variant(&self.item, color)
    }

    pub fn matches_color(&self, color: Color) -> bool {
        self.item.matches_color(color)
    }
}

impl From<Item> for CatalogItem {
    fn from(item: Item) -> Self {
        Self::new(item, false)
    }
}
