//! Item model for the island catalog: code tables, normalized items with
//! variant groups and patterns, per-item view state, and the display
//! projections derived from it.
//!
//! This crate does no I/O. `nookdex-data` builds [`Item`]s from raw
//! datasets; `nookdex-query` filters and sorts [`CatalogItem`]s.

pub mod codes;
pub mod entity;
pub mod image;
pub mod model;
pub mod view;

pub use codes::{Category, CodeParseError, Color, ItemSize, Version};
pub use entity::CatalogItem;
pub use image::{DEFAULT_CDN_HOST, resolve_image_url};
pub use model::{Item, Pattern, Selection, VariantGroup};
pub use view::{
    NAME_SEPARATOR, ViewState, current_pattern, current_variant, display_colors, display_id,
    display_image, display_name,
};
