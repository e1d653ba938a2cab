//! Filtering, sorting and filter options over a normalized catalog.

pub mod filter;
pub mod options;
pub mod sort;

pub use filter::{
    FilterCriteria, OwnedFilter, OwnedFilterParseError, filter_and_sync_display, filter_items,
};
pub use options::{FilterOption, FilterOptions, populate_filter_options};
pub use sort::{SortKey, SortKeyParseError, collation_key, compare_names, sort_by_value, sort_items};
