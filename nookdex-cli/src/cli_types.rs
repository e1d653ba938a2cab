//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use nookdex_core::{Category, Color, ItemSize, Version};
use nookdex_query::{FilterCriteria, OwnedFilter, SortKey};

#[derive(Parser)]
#[command(name = "nookdex")]
#[command(about = "Browse, filter and sort the island item catalog", long_about = None)]
pub(crate) struct Cli {
    /// Directory containing the JSON datasets (overrides settings.toml)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter dimensions shared by commands that list items.
#[derive(Args, Clone, Default)]
pub(crate) struct FilterArgs {
    /// Case-insensitive text to find in item names
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category (e.g., housewares, tops, wall-mounted)
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Ownership: all, owned or not-owned
    #[arg(long, default_value = "all")]
    pub owned: OwnedFilter,

    /// Version the item was added in (e.g., 1.0.0, 2.0.0)
    #[arg(long)]
    pub version: Option<Version>,

    /// How the item is obtained (e.g., "Nook's Cranny", Crafting)
    #[arg(long)]
    pub source: Option<String>,

    /// Footprint (e.g., 1x1, 2x1.5)
    #[arg(long)]
    pub size: Option<ItemSize>,

    /// Item tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Series code
    #[arg(long)]
    pub series: Option<String>,

    /// Color present on the item or any of its patterns
    #[arg(long)]
    pub color: Option<Color>,
}

impl FilterArgs {
    pub(crate) fn into_criteria(self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new().owned(self.owned);
        if let Some(search) = self.search {
            criteria = criteria.search(search);
        }
        if let Some(category) = self.category {
            criteria = criteria.category(category);
        }
        if let Some(version) = self.version {
            criteria = criteria.version(version);
        }
        if let Some(source) = self.source {
            criteria = criteria.source(source);
        }
        if let Some(size) = self.size {
            criteria = criteria.size(size);
        }
        if let Some(tag) = self.tag {
            criteria = criteria.tag(tag);
        }
        if let Some(series) = self.series {
            criteria = criteria.series(series);
        }
        if let Some(color) = self.color {
            criteria = criteria.color(color);
        }
        criteria
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List items matching the given filters
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Switch color-matched items to the pattern that has the color
        #[arg(long)]
        sync_colors: bool,

        /// Sort order: name-asc, name-desc, id-asc or id-desc (default from settings)
        #[arg(long)]
        sort: Option<SortKey>,

        /// Maximum number of items to print (0 = no limit; default from settings)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print items as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one item with its variants and patterns
    Show {
        /// Item id, untranslated name or display name
        item: String,

        /// Variant group index to display
        #[arg(long)]
        variant: Option<usize>,

        /// Pattern index within the displayed variant
        #[arg(long)]
        pattern: Option<usize>,

        /// Jump to the first pattern that has this color
        #[arg(long)]
        color: Option<Color>,

        /// Print the item as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the choices available for every filter
    Options,

    /// Re-import ownership from a catalog export
    Import {
        /// Catalog JSON file ({"items": [{"label": ..., "unique_id": ...}]})
        file: PathBuf,
    },

    /// List insects, fish and sea creatures
    Creatures {
        /// Case-insensitive text to find in creature names
        #[arg(short, long)]
        search: Option<String>,

        /// Print the creatures as catalog items in JSON
        #[arg(long)]
        json: bool,
    },

    /// List special characters
    Npcs,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,

    /// Change one setting and save the file (e.g. display.locale uSen)
    Set {
        /// Dotted key, e.g. display.page_size
        key: String,

        /// New value
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_flags_build_criteria() {
        let cli = Cli::try_parse_from([
            "nookdex", "list", "-s", "chair", "-c", "housewares", "--owned", "not-owned",
            "--color", "red", "--sort", "name-desc",
        ])
        .unwrap();
        let Commands::List { filters, sort, .. } = cli.command else {
            panic!("expected list");
        };
        assert_eq!(sort, Some(SortKey::NameDesc));

        let expected = FilterCriteria::new()
            .search("chair")
            .category(Category::Housewares)
            .owned(OwnedFilter::NotOwned)
            .color(Color::Red);
        assert_eq!(filters.into_criteria(), expected);
    }

    #[test]
    fn show_accepts_a_name() {
        let cli = Cli::try_parse_from(["nookdex", "show", "wooden chair", "--variant", "1"]).unwrap();
        let Commands::Show { item, variant, .. } = cli.command else {
            panic!("expected show");
        };
        assert_eq!(item, "wooden chair");
        assert_eq!(variant, Some(1));
    }

    #[test]
    fn config_set_takes_key_and_value() {
        let cli = Cli::try_parse_from(["nookdex", "config", "set", "display.locale", "uSen"]).unwrap();
        let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        else {
            panic!("expected config set");
        };
        assert_eq!((key.as_str(), value.as_str()), ("display.locale", "uSen"));
    }

    #[test]
    fn default_filters_are_empty() {
        assert!(FilterArgs::default().into_criteria().is_empty());
    }

    #[test]
    fn unknown_sort_is_rejected() {
        assert!(Cli::try_parse_from(["nookdex", "list", "--sort", "price"]).is_err());
    }
}
